use std::fmt;

/// A raw value read from the source table. SBFspot stores integers for
/// timestamps, serials and yields; a few spot fields may be REAL.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    /// Apply a multiplicative conversion factor. Integer values stay
    /// integers so that timestamps and Wh counters render without a
    /// decimal point.
    pub fn scale(&self, factor: i64) -> Value {
        match self {
            Value::Int(i) => Value::Int(i * factor),
            Value::Float(f) => Value::Float(f * factor as f64),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One source row, in the active record format's field order.
pub type Row = Vec<Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_preserves_integers() {
        assert_eq!(Value::Int(100).scale(3600), Value::Int(360000));
        assert_eq!(Value::Int(100).scale(1), Value::Int(100));
        assert_eq!(Value::Float(1.5).scale(2), Value::Float(3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(1541859248).to_string(), "1541859248");
        assert_eq!(Value::Float(49.98).to_string(), "49.98");
    }
}
