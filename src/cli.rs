use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Run without GUI (headless)
    #[arg(long, default_value_t = false)]
    pub nogui: bool,

    /// Number of frames to render in headless mode
    #[arg(long, default_value_t = 300)]
    pub frames: u32,

    /// Start from a named preset (b-dna, active-transcription, under-stress, dormant)
    #[arg(long)]
    pub preset: Option<String>,

    /// Enable the reaction policy (overrides config)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub reactions: Option<bool>,
}
