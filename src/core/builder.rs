//! Deterministic assembly of the baseline-fit `Process`.
//!
//! The builder owns the construction order the engine depends on: run
//! mode, libraries, processor instantiation, parameter population,
//! sequence, then file lists. All failures are fatal to the invocation;
//! there is no partial `Process`.
use std::path::{Path, PathBuf};

use crate::core::params::FitParams;
use crate::core::process::{Process, Processor};
use crate::core::schema;
use crate::error::{Error, Result};
use crate::types::RunMode;

/// Environment variable naming the engine installation root. Resolved by
/// the CLI layer; the builder itself never reads the environment.
pub const BASE_ENV: &str = "HPSTR_BASE";

/// Shared library the engine must load before running the sequence.
const PROCESSOR_LIBRARY: &str = "libprocessors.so";

/// Histogram-fit configuration shipped with the engine, relative to its
/// installation root. Passed through as an opaque path string.
const HIST_CFG_RELATIVE: &str = "analysis/plotconfigs/svt/SvtBlFits.json";

/// Suffix marking the derived fit product.
const OUTPUT_SUFFIX: &str = "_SvtBaselineFit";

/// Extension shared by input and output histogram files.
const ROOT_EXT: &str = ".root";

/// Assembles a complete baseline-fit [`Process`] from typed settings.
///
/// The engine installation root is injected explicitly rather than read
/// from ambient process state, so the builder is fully determined by its
/// inputs: identical settings produce structurally equal processes.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    base_dir: PathBuf,
    params: FitParams,
    input_file: Option<String>,
    output_file: Option<String>,
    output_dir: PathBuf,
}

impl ProcessBuilder {
    pub fn new(base_dir: impl Into<PathBuf>, params: FitParams) -> Self {
        Self {
            base_dir: base_dir.into(),
            params,
            input_file: None,
            output_file: None,
            output_dir: PathBuf::from("."),
        }
    }

    /// Input histogram file handed to the engine. Existence is not
    /// checked here; the engine fails at execution time if it is absent.
    pub fn input_file(mut self, file: impl Into<String>) -> Self {
        self.input_file = Some(file.into());
        self
    }

    /// Explicit output file name, used verbatim. When not given, the
    /// output name is derived from the input file.
    pub fn output_file(mut self, file: impl Into<String>) -> Self {
        self.output_file = Some(file.into());
        self
    }

    /// Directory derived output files are placed in. Defaults to `.`.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Derived output path for `input`: strip the `.root` extension,
    /// append the fit-product suffix, and join with the output
    /// directory. An input without the `.root` extension is rejected
    /// rather than silently producing a malformed name.
    fn derive_output_path(&self, input: &str) -> Result<String> {
        let file_name = Path::new(input)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(input);
        let stem = file_name
            .strip_suffix(ROOT_EXT)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::InvalidArgument {
                arg: "inFile",
                value: input.to_string(),
            })?;
        let name = format!("{stem}{OUTPUT_SUFFIX}{ROOT_EXT}");
        Ok(self.output_dir.join(name).to_string_lossy().into_owned())
    }

    /// Assemble the `Process`.
    ///
    /// The populated processor is checked against its parameter schema
    /// before it enters the sequence, so an unknown key or a mistyped
    /// value never reaches the engine.
    pub fn build(&self) -> Result<Process> {
        let mut process = Process::new(RunMode::HISTO);
        process.add_library(PROCESSOR_LIBRARY);

        let hist_cfg = self
            .base_dir
            .join(HIST_CFG_RELATIVE)
            .to_string_lossy()
            .into_owned();

        let mut fit = Processor::new("fitBL", schema::SVT_BL_FIT.type_name);
        fit.parameters.set("histCfg", hist_cfg);
        fit.parameters.set("hybrid", self.params.hybrids.clone());
        fit.parameters.set("rebin", self.params.rebin);
        fit.parameters.set("nPoints", self.params.n_points);
        fit.parameters.set("xmin", self.params.xmin);
        fit.parameters.set("minStats", self.params.min_stats);
        fit.parameters.set("noisy", self.params.noisy);
        fit.parameters.set("deadRMS", self.params.dead_rms);
        schema::SVT_BL_FIT.validate(&fit)?;

        process.sequence.push(fit);

        match (&self.input_file, &self.output_file) {
            (Some(input), Some(output)) => {
                process.input_files.push(input.clone());
                process.output_files.push(output.clone());
            }
            (Some(input), None) => {
                let output = self.derive_output_path(input)?;
                process.input_files.push(input.clone());
                process.output_files.push(output);
            }
            (None, Some(output)) => {
                process.output_files.push(output.clone());
            }
            (None, None) => {}
        }

        Ok(process)
    }
}
