use anyhow::{Result, anyhow};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use orderflow_platform::{FunctionConfig, LogFormat};
use serde_json::Value;
use tracing::{debug, info};

pub const GREETING: &str = "hello λ!";

const DEFAULT_FUNCTION_NAME: &str = "order-event";
const DEFAULT_LOG_FILTER: &str = "orderflow_order_event=info";

#[tokio::main]
async fn main() -> Result<()> {
    let config = FunctionConfig::from_env(DEFAULT_FUNCTION_NAME, DEFAULT_LOG_FILTER)?;
    init_tracing(&config);

    info!("{} waiting for invocations", config.function_name);

    lambda_runtime::run(service_fn(handler))
        .await
        .map_err(|err| anyhow!(err))?;

    Ok(())
}

// CloudWatch stamps each line itself.
fn init_tracing(config: &FunctionConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .with_target(false)
        .without_time();

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn handler(event: LambdaEvent<Value>) -> Result<String, Error> {
    debug!(request_id = %event.context.request_id, "order event invoked");
    Ok(GREETING.to_string())
}

#[cfg(test)]
mod tests {
    use lambda_runtime::Context;
    use serde_json::json;

    use super::*;

    fn invocation(payload: Value) -> LambdaEvent<Value> {
        LambdaEvent::new(payload, Context::default())
    }

    #[tokio::test]
    async fn greets_without_input() {
        let output = handler(invocation(Value::Null)).await.unwrap();
        assert_eq!(output, "hello λ!");
    }

    #[tokio::test]
    async fn ignores_whatever_payload_arrives() {
        let payloads = [
            json!({ "order_id": "o1", "total_price": 999 }),
            json!(["unexpected", 1, true]),
            json!("plain string"),
            json!(42),
        ];

        for payload in payloads {
            let output = handler(invocation(payload)).await.unwrap();
            assert_eq!(output, GREETING);
        }
    }

    #[tokio::test]
    async fn response_serializes_as_json_string() {
        let output = handler(invocation(json!({}))).await.unwrap();
        assert_eq!(serde_json::to_string(&output).unwrap(), "\"hello λ!\"");
    }
}
