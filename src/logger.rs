use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Mirrors every log line to a file on top of stderr.
struct Tee {
    file: std::fs::File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let _ = io::stderr().write_all(buf);
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = io::stderr().flush();
        self.file.flush()
    }
}

/// Info-level default, overridable through RUST_LOG. Pass a path to also
/// append the run's log to a file.
pub fn init(log_file: Option<&Path>) {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env();

    if let Some(path) = log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(Tee { file })));
            }
            Err(e) => eprintln!("Could not open log file {:?}: {}", path, e),
        }
    }

    builder.init();
    log::info!("Logger initialized.");
}
