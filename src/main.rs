use netcider::cli;
use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    netcider::init_logging();
    log::info!("#Start main()");

    let opts = match cli::parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            cli::report_error(e.as_ref());
            let _ = cli::usage(&mut io::stderr());
            return ExitCode::from(2);
        }
    };

    if opts.help {
        let _ = cli::usage(&mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let inputs: Vec<String> = if let Some(cidr) = &opts.cidr {
        vec![cidr.clone()]
    } else if !io::stdin().is_terminal() {
        // Piped input: one CIDR per line, blank lines skipped.
        io::stdin()
            .lock()
            .lines()
            .map_while(Result::ok)
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        let _ = cli::usage(&mut io::stderr());
        return ExitCode::from(2);
    };

    if inputs.is_empty() {
        let _ = cli::usage(&mut io::stderr());
        return ExitCode::from(2);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    match cli::run(&mut out, &inputs, &opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            cli::report_error(e.as_ref());
            ExitCode::from(1)
        }
    }
}
