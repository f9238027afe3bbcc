//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use csv::Error as CsvError;
use mindstock_domain::MindstockError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MindstockError);

impl From<InfraError> for MindstockError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MindstockError> for InfraError {
    fn from(value: MindstockError) -> Self {
        InfraError(value)
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(MindstockError::Storage(format!("io error: {value}")))
    }
}

impl From<CsvError> for InfraError {
    fn from(value: CsvError) -> Self {
        // A csv::Error wrapping io keeps its io flavour in the message
        InfraError(MindstockError::Storage(format!("csv error: {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_to_storage() {
        let io = IoError::new(std::io::ErrorKind::NotFound, "gone");
        let err: MindstockError = InfraError::from(io).into();
        assert!(matches!(err, MindstockError::Storage(_)));
    }

    #[test]
    fn domain_errors_round_trip_unchanged() {
        let original = MindstockError::NotFound("inventory item 7".to_string());
        let err: MindstockError = InfraError::from(original.clone()).into();
        assert_eq!(err, original);
    }
}
