pub mod availability_service;
pub mod booking_flow_service;
pub mod cart_service;
