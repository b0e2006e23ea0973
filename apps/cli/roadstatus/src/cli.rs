use clap::Parser;

/// Command-line surface: exactly one positional road id.
#[derive(Debug, Parser)]
#[command(
    name = "roadstatus",
    about = "Report the current status of a TfL road corridor",
    version
)]
pub struct Cli {
    /// Road corridor id to look up, e.g. A2
    pub road_id: String,
}
