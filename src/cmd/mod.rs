pub mod accuracy;
pub mod checkout;
pub mod score;
pub mod tendency;
