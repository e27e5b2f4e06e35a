use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_rates() {
        let cli = Cli::parse_from(["voices"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
    }

    #[test]
    fn test_rates_from_args() {
        let cli = Cli::parse_from(["voices", "--tick-rate", "2", "-f", "60"]);
        assert_eq!(cli.tick_rate, 2.0);
        assert_eq!(cli.frame_rate, 60.0);
    }
}
