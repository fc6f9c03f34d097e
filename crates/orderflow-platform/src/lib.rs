pub mod config;
pub mod contracts;

pub use config::{FunctionConfig, LogFormat};
pub use contracts::{
    CreateOrderEvent, CreateOrderRequest, CreateOrderResponse, ProcessPaymentData,
};
