pub mod availability;
pub mod bookings;
pub mod cart;
pub mod salons;
