use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Static analysis for code snippets")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ./config.toml or ~/.snipcheck/config.toml.
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ServeArgs {
    /// Defaults to `http_server.host` from config.
    #[arg(long)]
    pub host: Option<String>,

    /// Defaults to `http_server.port` from config.
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Language hint (python, go, javascript, typescript).
    /// With `--file` and no hint, the file extension is used.
    #[arg(long)]
    pub language: Option<String>,

    /// Read the snippet from a file.
    #[arg(long, group = "input")]
    pub file: Option<String>,

    /// Pass the snippet inline. Without `--file` or `--code`, stdin is read.
    #[arg(long, group = "input")]
    pub code: Option<String>,

    /// Skip the result sink for this run.
    #[arg(long, default_value_t = false)]
    pub no_persist: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the HTTP analysis service.
    Serve(ServeArgs),
    /// Analyze one snippet and print the response as JSON.
    Analyze(AnalyzeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_inputs_are_exclusive() {
        let res = Args::try_parse_from(["snipcheck", "analyze", "--file", "a.py", "--code", "x"]);
        assert!(res.is_err());
    }

    #[test]
    fn parses_analyze() {
        let args = Args::try_parse_from([
            "snipcheck",
            "analyze",
            "--language",
            "python",
            "--code",
            "import os",
            "--no-persist",
        ])
        .unwrap();
        match args.command {
            Commands::Analyze(a) => {
                assert_eq!(a.language.as_deref(), Some("python"));
                assert_eq!(a.code.as_deref(), Some("import os"));
                assert!(a.no_persist);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_overrides_are_optional() {
        let args = Args::try_parse_from(["snipcheck", "serve", "--port", "9090"]).unwrap();
        match args.command {
            Commands::Serve(s) => {
                assert_eq!(s.port, Some(9090));
                assert_eq!(s.host, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
