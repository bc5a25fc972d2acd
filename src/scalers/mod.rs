pub mod standard_scaler;

pub use standard_scaler::{
    standardize, ScalerParams, StandardScaler, StandardizedVector, MOTION_PARAMS, SCALER_MEANS,
    SCALER_SCALES,
};
