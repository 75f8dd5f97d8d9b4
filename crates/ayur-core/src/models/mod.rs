pub mod answer;
pub mod assessment;
pub mod classification;
pub mod dosha;
pub mod user;
