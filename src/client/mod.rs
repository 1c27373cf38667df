pub mod drawing;
pub mod gui;
pub mod models;
pub mod services;
