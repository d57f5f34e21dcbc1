//! Parameter schemas for the processor types this crate can configure.
//!
//! The engine itself only rejects unknown or mistyped parameters at
//! execution time; checking against a declared schema while the
//! configuration is assembled surfaces those mistakes immediately.
use crate::core::process::Processor;
use crate::error::{Error, Result};
use crate::types::ValueKind;

/// Expected parameter set for one processor type.
///
/// The key strings are the wire contract with the native implementation
/// and must be reproduced verbatim.
#[derive(Copy, Clone, Debug)]
pub struct ProcessorSchema {
    pub type_name: &'static str,
    pub parameters: &'static [(&'static str, ValueKind)],
}

/// Baseline-fit histogram processor.
pub const SVT_BL_FIT: ProcessorSchema = ProcessorSchema {
    type_name: "SvtBlFitHistoProcessor",
    parameters: &[
        ("histCfg", ValueKind::Str),
        ("hybrid", ValueKind::List),
        ("rebin", ValueKind::Int),
        ("nPoints", ValueKind::Int),
        ("xmin", ValueKind::Int),
        ("minStats", ValueKind::Int),
        ("noisy", ValueKind::Int),
        ("deadRMS", ValueKind::Int),
    ],
};

const KNOWN: &[&ProcessorSchema] = &[&SVT_BL_FIT];

/// Look up the schema for a processor type, if it is one we know.
pub fn schema_for(type_name: &str) -> Option<&'static ProcessorSchema> {
    KNOWN.iter().copied().find(|s| s.type_name == type_name)
}

impl ProcessorSchema {
    /// Check a fully populated processor against this schema: every
    /// declared key present with the declared kind, and nothing else.
    pub fn validate(&self, processor: &Processor) -> Result<()> {
        for (key, expected) in self.parameters {
            match processor.parameters.get(key) {
                None => {
                    return Err(Error::MissingParameter {
                        processor: processor.name.clone(),
                        key: (*key).to_string(),
                    });
                }
                Some(value) if value.kind() != *expected => {
                    return Err(Error::ParameterType {
                        processor: processor.name.clone(),
                        key: (*key).to_string(),
                        expected: *expected,
                        got: value.kind(),
                    });
                }
                Some(_) => {}
            }
        }
        for key in processor.parameters.keys() {
            if !self.parameters.iter().any(|(k, _)| *k == key) {
                return Err(Error::UnknownParameter {
                    processor: processor.name.clone(),
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> Processor {
        let mut p = Processor::new("fitBL", SVT_BL_FIT.type_name);
        p.parameters.set("histCfg", "/base/analysis/plotconfigs/svt/SvtBlFits.json");
        p.parameters.set("hybrid", Vec::<String>::new());
        p.parameters.set("rebin", 1);
        p.parameters.set("nPoints", 3);
        p.parameters.set("xmin", 50);
        p.parameters.set("minStats", 8500);
        p.parameters.set("noisy", 400);
        p.parameters.set("deadRMS", 150);
        p
    }

    #[test]
    fn complete_processor_validates() {
        assert!(SVT_BL_FIT.validate(&populated()).is_ok());
    }

    #[test]
    fn missing_parameter_is_rejected() {
        let full = populated();
        let mut p = Processor::new("fitBL", SVT_BL_FIT.type_name);
        for (key, value) in full.parameters.iter() {
            if key != "noisy" {
                p.parameters.set(key, value.clone());
            }
        }
        match SVT_BL_FIT.validate(&p) {
            Err(Error::MissingParameter { key, .. }) => assert_eq!(key, "noisy"),
            other => panic!("expected MissingParameter, got {:?}", other),
        }
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let mut p = populated();
        p.parameters.set("verbosity", 1);
        match SVT_BL_FIT.validate(&p) {
            Err(Error::UnknownParameter { key, .. }) => assert_eq!(key, "verbosity"),
            other => panic!("expected UnknownParameter, got {:?}", other),
        }
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let mut p = populated();
        p.parameters.set("rebin", "two");
        match SVT_BL_FIT.validate(&p) {
            Err(Error::ParameterType { key, .. }) => assert_eq!(key, "rebin"),
            other => panic!("expected ParameterType, got {:?}", other),
        }
    }

    #[test]
    fn schema_lookup_by_type_name() {
        assert!(schema_for("SvtBlFitHistoProcessor").is_some());
        assert!(schema_for("NoSuchProcessor").is_none());
    }
}
