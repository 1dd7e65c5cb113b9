pub mod use_investment_animation;

pub use use_investment_animation::use_investment_animation;
