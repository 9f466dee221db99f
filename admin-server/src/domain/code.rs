//! Airport and country code types.

use std::fmt;

/// Error returned when parsing an invalid IATA airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// A 3-letter IATA airport code, e.g. "JFK" or "LHR".
///
/// Holding an `AirportCode` means the code already passed validation;
/// there is no unchecked constructor.
///
/// # Examples
///
/// ```
/// use admin_server::domain::AirportCode;
///
/// let jfk = AirportCode::parse("JFK").unwrap();
/// assert_eq!(jfk.as_str(), "JFK");
///
/// assert!(AirportCode::parse("jfk").is_err());
/// assert!(AirportCode::parse("JF").is_err());
/// assert!(AirportCode::parse("JFKX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Parse an airport code: exactly 3 capital letters A-Z.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let code: [u8; 3] = s.as_bytes().try_into().map_err(|_| InvalidAirportCode {
            reason: "IATA codes are exactly 3 letters",
        })?;

        if !code.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidAirportCode {
                reason: "IATA codes use capital letters A-Z only",
            });
        }

        Ok(AirportCode(code))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Invariant: parse admits nothing but capital ASCII letters.
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an invalid country code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid country code: {reason}")]
pub struct InvalidCountryCode {
    reason: &'static str,
}

/// A 2-letter ISO 3166-1 country code (e.g. "US", "GB"), validated on
/// construction like [`AirportCode`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse a country code: exactly 2 capital letters A-Z.
    pub fn parse(s: &str) -> Result<Self, InvalidCountryCode> {
        let code: [u8; 2] = s.as_bytes().try_into().map_err(|_| InvalidCountryCode {
            reason: "ISO country codes are exactly 2 letters",
        })?;

        if !code.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidCountryCode {
                reason: "ISO country codes use capital letters A-Z only",
            });
        }

        Ok(CountryCode(code))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Invariant: parse admits nothing but capital ASCII letters.
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.as_str())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
