use crate::model::Timestamp;
use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};

/// Naive UTC timestamp. Format: `YYYY-MM-DDTHH:MM:SS.ffffff`
#[Scalar(name = "DateTime")]
impl ScalarType for Timestamp {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(s) => Ok(s.parse::<Timestamp>()?),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_round_trip() {
        let ts = Timestamp::now();
        let value = ts.to_value();
        assert_eq!(<Timestamp as ScalarType>::parse(value).unwrap(), ts);
    }

    #[test]
    fn test_scalar_rejects_bad_input() {
        let bad = Value::String("2020-01-02T03:04:05Z".to_string());
        assert!(<Timestamp as ScalarType>::parse(bad).is_err());
        assert!(<Timestamp as ScalarType>::parse(Value::Boolean(true)).is_err());
    }
}
