pub mod image_codec;
pub mod predictor_service;
