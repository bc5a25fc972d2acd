use tracing::trace;

use crate::error::{ClassifierError, Result};
use crate::features::{feature_name, FEATURE_COUNT};

/// Per-feature means of the fitted standard scaler.
#[rustfmt::skip]
pub const SCALER_MEANS: [f64; FEATURE_COUNT] = [
    10.21886541, 2.28296651, 10.20023889, 5.22562478,
    18.98728822, 13.76166343, 5740.88572806, 10.23268411,
    0.29410218, 0.93116674, 1.66920908, -1.65741119,
    3.62482139, 5.28223258, 89.91796834, 0.71845937,
    -2.25340990, 1.24075164, 2.92679911, -6.87506484,
    0.91182524, 7.78689007, 404.03677510, 2.41622221,
    10.64256298, 2.36730343, 11.20050337, 6.55009465,
    20.43635561, 13.88626096, 6234.84047149, 10.64256298,
];

/// Per-feature scales (standard deviations) of the fitted standard scaler.
#[rustfmt::skip]
pub const SCALER_SCALES: [f64; FEATURE_COUNT] = [
    0.43848090, 2.23345087, 13.37981538, 4.70485023,
    9.60728868, 13.52942530, 904.70063484, 0.43511866,
    0.20652894, 0.89562134, 2.23530918, 1.66032869,
    3.86593248, 5.19538032, 119.17124595, 0.49746271,
    0.27582642, 1.17785164, 3.80559178, 5.26900775,
    3.13734484, 7.75847094, 212.97004625, 0.27281179,
    0.48182907, 2.36566647, 15.45066859, 3.43805079,
    11.08204307, 13.91323103, 1188.02728350, 0.48182907,
];

#[derive(Debug, Clone, PartialEq)]
pub struct ScalerParams {
    pub means: [f64; FEATURE_COUNT],
    pub scales: [f64; FEATURE_COUNT],
}

impl ScalerParams {
    pub const fn new(means: [f64; FEATURE_COUNT], scales: [f64; FEATURE_COUNT]) -> Self {
        ScalerParams { means, scales }
    }
}

/// Parameters the decision tree was fitted against.
pub const MOTION_PARAMS: ScalerParams = ScalerParams::new(SCALER_MEANS, SCALER_SCALES);

/// Output of [`standardize`], indexed like the raw feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardizedVector(Vec<f64>);

impl StandardizedVector {
    /// Wraps already-standardized values without checking their length.
    pub fn from_values(values: Vec<f64>) -> Self {
        StandardizedVector(values)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl std::ops::Deref for StandardizedVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for StandardizedVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Applies `(x - mean) / scale` to every feature of `raw`.
///
/// `raw` must hold exactly [`FEATURE_COUNT`] values; nothing is padded or
/// truncated. A zero scale is rejected instead of producing an infinity.
pub fn standardize(raw: &[f64], params: &ScalerParams) -> Result<StandardizedVector> {
    if raw.len() != FEATURE_COUNT {
        return Err(ClassifierError::shape_mismatch(FEATURE_COUNT, raw.len()));
    }

    let values = raw
        .iter()
        .zip(params.means.iter().zip(params.scales.iter()))
        .enumerate()
        .map(|(index, (&value, (&mean, &scale)))| {
            if scale == 0.0 {
                return Err(ClassifierError::DivisionByZero { index });
            }
            Ok((value - mean) / scale)
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(StandardizedVector(values))
}

#[derive(Debug, Clone)]
pub struct StandardScaler {
    params: ScalerParams,
}

impl StandardScaler {
    pub fn new(params: ScalerParams) -> Self {
        StandardScaler { params }
    }

    /// Scaler over the built-in motion parameters.
    pub fn motion() -> Self {
        StandardScaler::new(MOTION_PARAMS)
    }

    pub fn params(&self) -> &ScalerParams {
        &self.params
    }

    pub fn transform(&self, raw: &[f64]) -> Result<StandardizedVector> {
        standardize(raw, &self.params)
    }

    pub fn transform_value(&self, index: usize, value: f64) -> Result<f64> {
        let (mean, scale) = match (self.params.means.get(index), self.params.scales.get(index)) {
            (Some(&m), Some(&s)) => (m, s),
            _ => return Err(ClassifierError::index_out_of_range(index, FEATURE_COUNT)),
        };
        if scale == 0.0 {
            return Err(ClassifierError::DivisionByZero { index });
        }
        let scaled = (value - mean) / scale;
        trace!(feature = feature_name(index).unwrap_or("?"), value, scaled, "standardized value");
        Ok(scaled)
    }

    /// Maps standardized values back to raw feature space, `x * scale + mean`.
    pub fn inverse_transform(&self, standardized: &[f64]) -> Result<Vec<f64>> {
        if standardized.len() != FEATURE_COUNT {
            return Err(ClassifierError::shape_mismatch(FEATURE_COUNT, standardized.len()));
        }
        Ok(standardized
            .iter()
            .zip(self.params.means.iter().zip(self.params.scales.iter()))
            .map(|(&z, (&mean, &scale))| z * scale + mean)
            .collect())
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        StandardScaler::motion()
    }
}
