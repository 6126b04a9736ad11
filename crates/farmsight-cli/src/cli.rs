//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "farmsight")]
#[command(author, version, about = "CLI for farmsight field monitoring", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read the current sensor snapshot from the field device
    Sensors {
        /// Device base URL (overrides config)
        #[arg(short, long)]
        device_url: Option<String>,
    },

    /// Continuously poll the device and print each state change
    Watch {
        /// Device base URL (overrides config)
        #[arg(short, long)]
        device_url: Option<String>,

        /// Poll interval in milliseconds (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Number of updates to print before exiting (0 for unlimited)
        #[arg(short, long, default_value = "0")]
        count: u32,
    },

    /// Send a control command to the device
    Control {
        /// Command name: waterPumpActive, waterPumpAutomatic, or speakerEnabled
        command: String,

        /// Desired state (on/off)
        state: String,

        /// Device base URL (overrides config)
        #[arg(short, long)]
        device_url: Option<String>,
    },

    /// Show the latest plant-disease analysis
    Analysis {
        /// Inference server base URL (overrides config)
        #[arg(short, long)]
        inference_url: Option<String>,
    },

    /// Look up market insights for a crop
    Market {
        /// Crop name to query
        crop: String,

        /// Inference server base URL (overrides config)
        #[arg(short, long)]
        inference_url: Option<String>,
    },

    /// Fetch an hourly weather series and sample a week of points
    Forecast {
        /// Metric name, e.g. temperature_2m or soil_moisture_9_to_27cm
        metric: String,

        /// Latitude (overrides config)
        #[arg(long)]
        lat: Option<f64>,

        /// Longitude (overrides config)
        #[arg(long)]
        lon: Option<f64>,

        /// Weather API base URL (overrides config)
        #[arg(short, long)]
        weather_url: Option<String>,
    },
}
