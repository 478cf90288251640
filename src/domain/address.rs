// Copyright (c) 2025 - Cowboy AI, Inc.
//! Address Value Object and State Codes
//!
//! An address is owned by exactly one restaurant and compared by value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::invariants::{messages, ValidationResult, Violations};

/// Federative unit codes accepted in an address
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// Acre
    AC,
    /// Alagoas
    AL,
    /// Amapá
    AP,
    /// Amazonas
    AM,
    /// Bahia
    BA,
    /// Ceará
    CE,
    /// Distrito Federal
    DF,
    /// Espírito Santo
    ES,
    /// Goiás
    GO,
    /// Maranhão
    MA,
    /// Mato Grosso
    MT,
    /// Mato Grosso do Sul
    MS,
    /// Minas Gerais
    MG,
    /// Pará
    PA,
    /// Paraíba
    PB,
    /// Paraná
    PR,
    /// Pernambuco
    PE,
    /// Piauí
    PI,
    /// Rio de Janeiro
    RJ,
    /// Rio Grande do Norte
    RN,
    /// Rio Grande do Sul
    RS,
    /// Rondônia
    RO,
    /// Roraima
    RR,
    /// Santa Catarina
    SC,
    /// São Paulo
    SP,
    /// Sergipe
    SE,
    /// Tocantins
    TO,
}

impl State {
    pub const ALL: [State; 27] = [
        Self::AC, Self::AL, Self::AP, Self::AM, Self::BA, Self::CE, Self::DF,
        Self::ES, Self::GO, Self::MA, Self::MT, Self::MS, Self::MG, Self::PA,
        Self::PB, Self::PR, Self::PE, Self::PI, Self::RJ, Self::RN, Self::RS,
        Self::RO, Self::RR, Self::SC, Self::SP, Self::SE, Self::TO,
    ];

    /// Two-letter uppercase code
    pub fn code(&self) -> &'static str {
        match self {
            Self::AC => "AC",
            Self::AL => "AL",
            Self::AP => "AP",
            Self::AM => "AM",
            Self::BA => "BA",
            Self::CE => "CE",
            Self::DF => "DF",
            Self::ES => "ES",
            Self::GO => "GO",
            Self::MA => "MA",
            Self::MT => "MT",
            Self::MS => "MS",
            Self::MG => "MG",
            Self::PA => "PA",
            Self::PB => "PB",
            Self::PR => "PR",
            Self::PE => "PE",
            Self::PI => "PI",
            Self::RJ => "RJ",
            Self::RN => "RN",
            Self::RS => "RS",
            Self::RO => "RO",
            Self::RR => "RR",
            Self::SC => "SC",
            Self::SP => "SP",
            Self::SE => "SE",
            Self::TO => "TO",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Raised when text is not a known state code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown state code: {0}")]
pub struct UnknownState(pub String);

impl FromStr for State {
    type Err = UnknownState;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownState(s.to_string()))
    }
}

/// Postal address of a restaurant
///
/// # Invariants
/// - street: required, 10 to 150 characters
/// - number: greater than zero
/// - additional details: optional, at most 150 characters
/// - neighborhood: required, 3 to 30 characters
/// - city: required, 3 to 60 characters
/// - state: a known state code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    street: String,
    number: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_details: Option<String>,
    neighborhood: String,
    city: String,
    state: State,
}

impl Address {
    pub const STREET_MIN_LENGTH: usize = 10;
    pub const STREET_MAX_LENGTH: usize = 150;
    pub const DETAILS_MAX_LENGTH: usize = 150;
    pub const NEIGHBORHOOD_MIN_LENGTH: usize = 3;
    pub const NEIGHBORHOOD_MAX_LENGTH: usize = 30;
    pub const CITY_MIN_LENGTH: usize = 3;
    pub const CITY_MAX_LENGTH: usize = 60;

    /// Create a validated address
    ///
    /// `state` is matched case-insensitively and stored as its uppercase code.
    pub fn new(
        street: impl Into<String>,
        number: i32,
        additional_details: Option<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: &str,
    ) -> ValidationResult<Self> {
        let street = street.into();
        let neighborhood = neighborhood.into();
        let city = city.into();

        let mut violations = Violations::new();
        violations
            .text("street", &street)
            .required()
            .length(Self::STREET_MIN_LENGTH, Self::STREET_MAX_LENGTH);
        violations.positive("number", number);
        violations
            .optional_text("additional_details", additional_details.as_deref())
            .max_length(Self::DETAILS_MAX_LENGTH);
        violations
            .text("neighborhood", &neighborhood)
            .required()
            .length(Self::NEIGHBORHOOD_MIN_LENGTH, Self::NEIGHBORHOOD_MAX_LENGTH);
        violations
            .text("city", &city)
            .required()
            .length(Self::CITY_MIN_LENGTH, Self::CITY_MAX_LENGTH);
        let state = violations.member::<State>("state", state, messages::STATE);

        match state {
            Some(state) if violations.is_empty() => Ok(Self {
                street,
                number,
                additional_details,
                neighborhood,
                city,
                state,
            }),
            _ => Err(violations.into_error()),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn additional_details(&self) -> Option<&str> {
        self.additional_details.as_deref()
    }

    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> State {
        self.state
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.street, self.number)?;
        if let Some(details) = &self.additional_details {
            write!(f, " ({details})")?;
        }
        write!(f, " - {}, {}/{}", self.neighborhood, self.city, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paraiso() -> ValidationResult<Address> {
        Address::new(
            "Avenida Paraíso",
            1200,
            Some("Loja 2".to_string()),
            "Centro",
            "São Paulo",
            "sp",
        )
    }

    #[test]
    fn test_valid_address_round_trips() {
        let address = paraiso().unwrap();

        assert_eq!(address.street(), "Avenida Paraíso");
        assert_eq!(address.number(), 1200);
        assert_eq!(address.additional_details(), Some("Loja 2"));
        assert_eq!(address.neighborhood(), "Centro");
        assert_eq!(address.city(), "São Paulo");
        assert_eq!(address.state(), State::SP);
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(paraiso().unwrap(), paraiso().unwrap());
    }

    #[test]
    fn test_every_invalid_field_is_reported() {
        let error = Address::new("Rua", 0, Some("x".repeat(151)), "", "AB", "XX").unwrap_err();

        assert_eq!(
            error.messages_for("street"),
            vec!["must have between 10 and 150 characters"]
        );
        assert_eq!(error.messages_for("number"), vec!["must be greater than zero (0)"]);
        assert_eq!(
            error.messages_for("additional_details"),
            vec!["must have at most 150 characters"]
        );
        assert_eq!(
            error.messages_for("neighborhood"),
            vec!["must be filled", "must have between 3 and 30 characters"]
        );
        assert_eq!(
            error.messages_for("city"),
            vec!["must have between 3 and 60 characters"]
        );
        assert_eq!(error.messages_for("state"), vec!["must be a valid state code"]);
    }

    #[test]
    fn test_additional_details_optional() {
        let address = Address::new("Rua das Flores", 10, None, "Centro", "Curitiba", "PR").unwrap();
        assert_eq!(address.additional_details(), None);
    }

    #[test]
    fn test_state_parsing() {
        assert_eq!("rj".parse::<State>().unwrap(), State::RJ);
        assert_eq!("TO".parse::<State>().unwrap(), State::TO);
        assert!("".parse::<State>().is_err());
        assert!("SPX".parse::<State>().is_err());
        assert_eq!(State::ALL.len(), 27);
    }

    #[test]
    fn test_display() {
        let address = paraiso().unwrap();
        assert_eq!(
            address.to_string(),
            "Avenida Paraíso, 1200 (Loja 2) - Centro, São Paulo/SP"
        );
    }
}
