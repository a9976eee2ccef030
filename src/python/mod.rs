#![allow(clippy::useless_conversion)]

use log::LevelFilter;
use pyo3::{
    exceptions::{PyIndexError, PyValueError},
    prelude::*,
    wrap_pyfunction,
};

use crate::{
    api,
    error::{InvalidArgumentReason, SamplerError},
    samplers::UniqueNumberSampler,
    settings::SamplerSettings,
    types::Number,
};

// An exhausted source is an out-of-range condition from Python's point of view.
impl From<SamplerError> for PyErr {
    fn from(err: SamplerError) -> Self {
        match err {
            SamplerError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
            SamplerError::InvalidState(_) => PyIndexError::new_err(err.to_string()),
        }
    }
}

fn settings_from_seed(seed: Option<u64>) -> SamplerSettings {
    SamplerSettings {
        seed,
        ..SamplerSettings::default()
    }
}

// ---------------------------------------------------------------------------
// Logging helpers
// ---------------------------------------------------------------------------
fn parse_level(level: &str) -> PyResult<LevelFilter> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        other => Err(PyValueError::new_err(format!(
            "unknown log level {other:?}; expected trace, debug, info, warn, error or off"
        ))),
    }
}

#[pyfunction]
pub fn init_logging(level: &str) -> PyResult<()> {
    let filter = parse_level(level)?;
    let _ = env_logger::builder()
        .filter_level(filter)
        .is_test(false)
        .try_init();
    Ok(())
}

// ---------------------------------------------------------------------------
// Sampler class
// ---------------------------------------------------------------------------

/// Python-facing unique random number generator.
#[pyclass(name = "UniqueRandomNumberGenerator", module = "drawbag")]
pub struct PyUniqueNumberSampler {
    inner: UniqueNumberSampler,
}

#[pymethods]
impl PyUniqueNumberSampler {
    #[new]
    #[pyo3(signature = (numbers=None, seed=None))]
    fn py_new(numbers: Option<Vec<Number>>, seed: Option<u64>) -> PyResult<Self> {
        let numbers = numbers.ok_or(SamplerError::InvalidArgument(
            InvalidArgumentReason::MissingNumbers,
        ))?;
        let inner =
            UniqueNumberSampler::from_numbers_with_settings(numbers, &settings_from_seed(seed));
        Ok(Self { inner })
    }

    #[staticmethod]
    fn seeded(numbers: Vec<Number>, seed: u64) -> Self {
        let inner =
            UniqueNumberSampler::from_numbers_with_settings(numbers, &SamplerSettings::seeded(seed));
        Self { inner }
    }

    #[staticmethod]
    #[pyo3(signature = (min_number, max_number, seed=None))]
    fn from_range(min_number: Number, max_number: Number, seed: Option<u64>) -> PyResult<Self> {
        let inner = UniqueNumberSampler::from_range_with_settings(
            min_number,
            max_number,
            &settings_from_seed(seed),
        )?;
        Ok(Self { inner })
    }

    #[getter]
    fn remaining_numbers_count(&self) -> usize {
        self.inner.remaining_count()
    }

    #[getter]
    fn remaining_numbers(&self) -> Vec<Number> {
        self.inner.remaining_numbers()
    }

    #[getter]
    fn drawn_count(&self) -> usize {
        self.inner.drawn_count()
    }

    fn new_random_number(&mut self) -> PyResult<Number> {
        self.inner.sample().map_err(PyErr::from)
    }

    fn sample_many(&mut self, count: usize) -> PyResult<Vec<Number>> {
        self.inner.sample_many(count).map_err(PyErr::from)
    }

    fn __len__(&self) -> usize {
        self.inner.remaining_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "UniqueRandomNumberGenerator(population={:?}, remaining={})",
            self.inner.population(),
            self.inner.remaining_count()
        )
    }
}

// ---------------------------------------------------------------------------
// One-shot functions
// ---------------------------------------------------------------------------

/// Returns `(drawn, remaining)`.
#[pyfunction]
#[pyo3(name = "draw_from_numbers", signature = (numbers, count, seed=None))]
pub fn draw_from_numbers_py(
    numbers: Vec<Number>,
    count: usize,
    seed: Option<u64>,
) -> PyResult<(Vec<Number>, Vec<Number>)> {
    let result = api::draw_from_numbers(numbers, count, Some(settings_from_seed(seed)))?;
    Ok((result.drawn, result.remaining))
}

/// Returns `(drawn, remaining)`.
#[pyfunction]
#[pyo3(name = "draw_from_range", signature = (min_number, max_number, count, seed=None))]
pub fn draw_from_range_py(
    min_number: Number,
    max_number: Number,
    count: usize,
    seed: Option<u64>,
) -> PyResult<(Vec<Number>, Vec<Number>)> {
    let result = api::draw_from_range(
        min_number,
        max_number,
        count,
        Some(settings_from_seed(seed)),
    )?;
    Ok((result.drawn, result.remaining))
}

#[pyfunction]
#[pyo3(name = "shuffle_numbers", signature = (numbers, seed=None))]
pub fn shuffle_numbers_py(numbers: Vec<Number>, seed: Option<u64>) -> Vec<Number> {
    api::shuffle_numbers(numbers, Some(settings_from_seed(seed)))
}

#[pymodule]
#[pyo3(name = "drawbag")]
fn drawbag_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyUniqueNumberSampler>()?;

    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    m.add_function(wrap_pyfunction!(draw_from_numbers_py, m)?)?;
    m.add_function(wrap_pyfunction!(draw_from_range_py, m)?)?;
    m.add_function(wrap_pyfunction!(shuffle_numbers_py, m)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidStateReason;

    fn with_gil<F: FnOnce(Python<'_>)>(f: F) {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(f);
    }

    #[test]
    fn invalid_argument_maps_to_value_error() {
        with_gil(|py| {
            let err = PyErr::from(SamplerError::InvalidArgument(
                InvalidArgumentReason::InvertedRange { min: 3, max: 2 },
            ));
            assert!(err.is_instance_of::<PyValueError>(py));
            assert!(!err.is_instance_of::<PyIndexError>(py));
        });
    }

    #[test]
    fn invalid_state_maps_to_index_error() {
        with_gil(|py| {
            for reason in [
                InvalidStateReason::Exhausted,
                InvalidStateReason::InsufficientNumbers {
                    requested: 2,
                    remaining: 1,
                },
            ] {
                let err = PyErr::from(SamplerError::InvalidState(reason));
                assert!(err.is_instance_of::<PyIndexError>(py));
            }
        });
    }

    #[test]
    fn missing_numbers_raise_value_error() {
        with_gil(|py| {
            let err = PyUniqueNumberSampler::py_new(None, None).err().unwrap();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn exhausted_generator_raises_index_error() {
        with_gil(|py| {
            let mut g = PyUniqueNumberSampler::py_new(Some(vec![4]), Some(1)).unwrap();
            assert_eq!(g.new_random_number().unwrap(), 4);
            let err = g.new_random_number().unwrap_err();
            assert!(err.is_instance_of::<PyIndexError>(py));
            assert_eq!(g.__len__(), 0);
        });
    }

    #[test]
    fn seeded_constructor_is_reproducible() {
        let mut a = PyUniqueNumberSampler::seeded((0..20).collect(), 31);
        let mut b = PyUniqueNumberSampler::seeded((0..20).collect(), 31);
        let da = a.sample_many(20).unwrap();
        let db = b.sample_many(20).unwrap();
        assert_eq!(da, db);
        assert_eq!(a.drawn_count(), 20);
    }

    #[test]
    fn inverted_range_raises_value_error() {
        with_gil(|py| {
            let err = PyUniqueNumberSampler::from_range(3, 2, None).err().unwrap();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn log_levels_are_parsed_strictly() {
        assert_eq!(parse_level("INFO").unwrap(), LevelFilter::Info);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
        assert_eq!(parse_level("Trace").unwrap(), LevelFilter::Trace);

        with_gil(|py| {
            let err = parse_level("verbose").unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }
}
