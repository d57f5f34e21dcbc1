//! The `Process` configuration model handed off to the external engine:
//! an ordered processor sequence with typed parameter maps, the libraries
//! the engine must load, and the input/output file lists.
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{RunMode, Value};

/// Insertion-ordered parameter map for a single processor.
///
/// The dump and the serialized form list parameters exactly in the order
/// they were set; setting an existing key replaces its value in place.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Parameters(Vec<(String, Value)>);

impl Parameters {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set `key` to `value`, keeping the key's original position if it
    /// was already present.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Serialized as a JSON map; serde_json preserves our insertion order.
impl Serialize for Parameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Parameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParametersVisitor;

        impl<'de> Visitor<'de> for ParametersVisitor {
            type Value = Parameters;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of parameter names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Parameters, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(Parameters(entries))
            }
        }

        deserializer.deserialize_map(ParametersVisitor)
    }
}

/// One named unit of work, executed by the engine in sequence order.
///
/// `type_name` identifies the native implementation the engine must
/// instantiate; a `Processor` has no identity outside the `Process`
/// sequence that owns it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Processor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub parameters: Parameters,
}

impl Processor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            parameters: Parameters::new(),
        }
    }
}

/// The root configuration object.
///
/// Built once per invocation, mutated only during assembly, then treated
/// as immutable. The model does not verify that every processor in
/// `sequence` is fully configured; that is the builder's precondition.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Process {
    pub run_mode: RunMode,
    pub libraries: Vec<String>,
    pub sequence: Vec<Processor>,
    pub input_files: Vec<String>,
    pub output_files: Vec<String>,
}

impl Process {
    pub fn new(run_mode: RunMode) -> Self {
        Self {
            run_mode,
            libraries: Vec::new(),
            sequence: Vec::new(),
            input_files: Vec::new(),
            output_files: Vec::new(),
        }
    }

    /// Append a shared library, keeping `libraries` an ordered set: a
    /// name already present keeps its original load position.
    pub fn add_library(&mut self, library: impl Into<String>) {
        let library = library.into();
        if !self.libraries.iter().any(|l| *l == library) {
            self.libraries.push(library);
        }
    }

    /// Human-readable projection of the assembled configuration, for
    /// operator inspection before handoff.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

fn write_file_list(f: &mut fmt::Formatter<'_>, heading: &str, files: &[String]) -> fmt::Result {
    if files.is_empty() {
        writeln!(f, "  {}: (none)", heading)
    } else {
        writeln!(f, "  {}:", heading)?;
        for file in files {
            writeln!(f, "    {}", file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "process configuration")?;
        writeln!(f, "  run mode: {}", self.run_mode)?;
        writeln!(f, "  libraries:")?;
        for library in &self.libraries {
            writeln!(f, "    {}", library)?;
        }
        writeln!(f, "  sequence:")?;
        for processor in &self.sequence {
            writeln!(f, "    {} <{}>", processor.name, processor.type_name)?;
            for (key, value) in processor.parameters.iter() {
                writeln!(f, "      {}: {}", key, value)?;
            }
        }
        write_file_list(f, "input files", &self.input_files)?;
        write_file_list(f, "output files", &self.output_files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processor() -> Processor {
        let mut p = Processor::new("fitBL", "SvtBlFitHistoProcessor");
        p.parameters.set("xmin", 50);
        p.parameters.set("rebin", 1);
        p.parameters.set(
            "hybrid",
            vec!["baseline0hole".to_string(), "baseline1hole".to_string()],
        );
        p
    }

    #[test]
    fn parameters_preserve_insertion_order() {
        let p = sample_processor();
        let keys: Vec<&str> = p.parameters.keys().collect();
        assert_eq!(keys, ["xmin", "rebin", "hybrid"]);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut p = sample_processor();
        p.parameters.set("xmin", 60);
        let keys: Vec<&str> = p.parameters.keys().collect();
        assert_eq!(keys, ["xmin", "rebin", "hybrid"]);
        assert_eq!(p.parameters.get("xmin"), Some(&Value::Int(60)));
        assert_eq!(p.parameters.len(), 3);
    }

    #[test]
    fn add_library_is_an_ordered_set() {
        let mut process = Process::new(RunMode::HISTO);
        process.add_library("libprocessors.so");
        process.add_library("libutils.so");
        process.add_library("libprocessors.so");
        assert_eq!(process.libraries, ["libprocessors.so", "libutils.so"]);
    }

    #[test]
    fn dump_lists_processors_and_files() {
        let mut process = Process::new(RunMode::HISTO);
        process.add_library("libprocessors.so");
        process.sequence.push(sample_processor());
        process.input_files.push("hps_run12345.root".to_string());
        process
            .output_files
            .push("/out/hps_run12345_SvtBaselineFit.root".to_string());

        let dump = process.dump();
        assert!(dump.contains("run mode: 2"));
        assert!(dump.contains("libprocessors.so"));
        assert!(dump.contains("fitBL <SvtBlFitHistoProcessor>"));
        assert!(dump.contains("hybrid: [baseline0hole, baseline1hole]"));
        assert!(dump.contains("hps_run12345.root"));
        assert!(dump.contains("/out/hps_run12345_SvtBaselineFit.root"));
    }

    #[test]
    fn dump_marks_empty_file_lists() {
        let process = Process::new(RunMode::HISTO);
        let dump = process.dump();
        assert!(dump.contains("input files: (none)"));
        assert!(dump.contains("output files: (none)"));
    }

    #[test]
    fn json_projection_keeps_parameter_order() {
        let mut process = Process::new(RunMode::HISTO);
        process.sequence.push(sample_processor());

        let json = serde_json::to_string(&process).unwrap();
        let xmin = json.find("\"xmin\"").unwrap();
        let rebin = json.find("\"rebin\"").unwrap();
        let hybrid = json.find("\"hybrid\"").unwrap();
        assert!(xmin < rebin && rebin < hybrid);
        assert!(json.contains("\"type\":\"SvtBlFitHistoProcessor\""));
        assert!(json.contains("\"run_mode\":2"));
    }
}
