#![doc = r#"
blfit — configuration assembler for the SVT baseline-fit batch pipeline.

This crate translates command-line parameters into a structured process
description: a named, ordered sequence of processors with typed parameter
maps, input/output file lists, and a run mode. The resulting `Process`
value is the sole artifact handed to the external execution engine that
performs the actual histogram fitting; no numerical work happens here.

The library exposes the configuration model (`Process`, `Processor`,
typed `Value` parameters), the per-processor parameter schemas, and the
deterministic `ProcessBuilder`. The `blfit` binary is a thin CLI wrapper
around these.

Quick start: assemble a baseline-fit job
----------------------------------------
```rust
use blfit::{FitParams, ProcessBuilder};

fn main() -> blfit::Result<()> {
    let params = FitParams {
        xmin: 60,
        hybrids: vec!["baseline0hole".to_string()],
        ..FitParams::default()
    };

    let process = ProcessBuilder::new("/opt/engine", params)
        .input_file("hps_run12345.root")
        .output_dir("/out")
        .build()?;

    // Operator dump, then the serialized handoff form.
    print!("{process}");
    let json = serde_json::to_string_pretty(&process)?;
    assert!(json.contains("SvtBlFitHistoProcessor"));
    Ok(())
}
```

Determinism
-----------
The builder is fully determined by its inputs: the engine installation
root is injected explicitly (the CLI resolves it from `HPSTR_BASE`), and
identical settings produce structurally equal `Process` values. Output
file names are derived from the input name when not given explicitly
(`hps_run12345.root` -> `hps_run12345_SvtBaselineFit.root`).

Validation
----------
Processor parameters are checked against the schema declared for the
processor type at assembly time: unknown keys, missing keys, and
wrong-kind values fail the invocation before anything reaches the
engine. Parameter key strings are the wire contract with the native
implementation and are reproduced verbatim.

Error handling
--------------
All public functions return `blfit::Result<T>`; match on `blfit::Error`
to handle specific cases, e.g. the missing engine root or a schema
violation.

Useful modules
--------------
- [`core`] — params, process model, schemas, and the builder.
- [`types`] — `RunMode` and the typed parameter `Value`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::builder::{BASE_ENV, ProcessBuilder};
pub use crate::core::params::FitParams;
pub use crate::core::process::{Parameters, Process, Processor};
pub use crate::core::schema::{ProcessorSchema, SVT_BL_FIT, schema_for};
pub use error::{Error, Result};
pub use types::{RunMode, Value, ValueKind};
