use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "blfit",
    version,
    about = "Assemble the SVT baseline-fit job configuration"
)]
pub struct CliArgs {
    /// Lower bound of the iterative fit range
    #[arg(short = 'x', long, default_value_t = 50)]
    pub xmin: i64,

    /// Minimum statistics required per bin to perform the fit
    #[arg(short = 'm', long = "minStats", default_value_t = 8500)]
    pub min_stats: i64,

    /// Number of points used for the second-derivative estimate
    #[arg(short = 'p', long = "nPoints", default_value_t = 3)]
    pub n_points: i64,

    /// Histogram rebin factor
    #[arg(short = 'b', long, default_value_t = 1)]
    pub rebin: i64,

    /// baseline<#><hybrid_name> tokens selecting channels, comma separated
    #[arg(short = 's', long, value_delimiter = ',')]
    pub hybrid: Vec<String>,

    /// RMS threshold above which a channel is classified noisy
    #[arg(short = 'n', long, default_value_t = 400)]
    pub noisy: i64,

    /// RMS threshold below which a channel is classified dead
    #[arg(short = 'D', long = "deadRMS", default_value_t = 150)]
    pub dead_rms: i64,

    /// Input histogram file
    #[arg(short = 'i', long = "inFile")]
    pub in_file: Option<String>,

    /// Explicit output file name (derived from the input when omitted)
    #[arg(short = 'o', long = "outFile")]
    pub out_file: Option<String>,

    /// Output directory for derived file names
    #[arg(short = 'd', long = "outDir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Run number used to locate the input when --inFile is not given
    #[arg(short = 'r', long)]
    pub run: Option<String>,

    /// Subdirectory of the output directory for this job's products
    #[arg(short = 'f', long)]
    pub folder: Option<String>,

    /// Write the assembled configuration as JSON to this file
    #[arg(short = 'e', long)]
    pub emit: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_flags_take_documented_defaults() {
        let args = CliArgs::try_parse_from(["blfit"]).unwrap();
        assert_eq!(args.xmin, 50);
        assert_eq!(args.min_stats, 8500);
        assert_eq!(args.n_points, 3);
        assert_eq!(args.rebin, 1);
        assert!(args.hybrid.is_empty());
        assert_eq!(args.noisy, 400);
        assert_eq!(args.dead_rms, 150);
        assert!(args.in_file.is_none());
        assert!(args.out_file.is_none());
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(args.run.is_none());
        assert!(args.folder.is_none());
        assert!(args.emit.is_none());
        assert!(!args.log);
    }

    #[test]
    fn hybrid_splits_on_commas_preserving_order() {
        let args =
            CliArgs::try_parse_from(["blfit", "--hybrid", "baseline0hole,baseline1hole"]).unwrap();
        assert_eq!(args.hybrid, ["baseline0hole", "baseline1hole"]);
    }

    #[test]
    fn hybrid_keeps_duplicates() {
        let args =
            CliArgs::try_parse_from(["blfit", "-s", "baseline0hole,baseline0hole"]).unwrap();
        assert_eq!(args.hybrid, ["baseline0hole", "baseline0hole"]);
    }

    #[test]
    fn long_flags_use_the_engine_spelling() {
        let args = CliArgs::try_parse_from([
            "blfit", "--minStats", "9000", "--nPoints", "5", "--deadRMS", "100", "--inFile",
            "f.root", "--outDir", "/out",
        ])
        .unwrap();
        assert_eq!(args.min_stats, 9000);
        assert_eq!(args.n_points, 5);
        assert_eq!(args.dead_rms, 100);
        assert_eq!(args.in_file.as_deref(), Some("f.root"));
        assert_eq!(args.out_dir, PathBuf::from("/out"));
    }

    #[test]
    fn short_flags_cover_the_fit_options() {
        let args = CliArgs::try_parse_from([
            "blfit", "-x", "60", "-m", "9000", "-p", "4", "-b", "2", "-s", "baseline0hole", "-n",
            "500", "-D", "120",
        ])
        .unwrap();
        assert_eq!(args.xmin, 60);
        assert_eq!(args.min_stats, 9000);
        assert_eq!(args.n_points, 4);
        assert_eq!(args.rebin, 2);
        assert_eq!(args.hybrid, ["baseline0hole"]);
        assert_eq!(args.noisy, 500);
        assert_eq!(args.dead_rms, 120);
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        assert!(CliArgs::try_parse_from(["blfit", "--bogus"]).is_err());
    }

    #[test]
    fn non_integer_value_is_rejected() {
        assert!(CliArgs::try_parse_from(["blfit", "--xmin", "fifty"]).is_err());
        assert!(CliArgs::try_parse_from(["blfit", "--rebin", "1.5"]).is_err());
    }
}
