mod command;

use clap::Parser;
use command::{command, Command};
use ramsim_core::hex;
use ramsim_core::notification::Collect;
use ramsim_core::picker::{LowestFree, RandomPicker, SlotPicker};
use ramsim_core::RamSimulator;
use std::io::{BufRead, BufReader, IsTerminal, Write};
use std::path::PathBuf;

const HELP: &str = "\
commands:
  value <text>     type into the value field
  assign [<text>]  press Assign, optionally typing <text> first
  read <address>   report the value stored at a decimal address
  free             free the whole memory
  show             print the memory table
  help             this text
  quit             leave";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of memory cells.
    #[arg(short, long, default_value_t = 8)]
    size: usize,

    /// Seed for picking free cells, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Always write to the lowest free address.
    #[arg(long, conflicts_with = "seed")]
    sequential: bool,

    /// Read commands from a file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

impl Args {
    fn picker(&self) -> Box<dyn SlotPicker> {
        match (self.sequential, self.seed) {
            (true, _) => Box::new(LowestFree),
            (false, Some(seed)) => Box::new(RandomPicker::seeded(seed)),
            (false, None) => Box::new(RandomPicker::from_entropy()),
        }
    }
}

struct Session {
    simulator: RamSimulator,
    notifications: Collect,
    prompt: bool,
}

impl Session {
    fn new(size: usize, picker: Box<dyn SlotPicker>, prompt: bool) -> Result<Self, String> {
        let notifications = Collect::new();
        let simulator = RamSimulator::with_picker(size, picker, notifications.clone())
            .map_err(|error| error.to_string())?;
        Ok(Self {
            simulator,
            notifications,
            prompt,
        })
    }

    fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> std::io::Result<()> {
        write!(output, "{}", self.simulator.view())?;
        self.show_prompt(output)?;

        for line in input.lines() {
            let line = line?;
            let keep_going = match command(&line) {
                Ok((_, Some(command))) => self.execute(command, output)?,
                Ok((_, None)) => true,
                Err(_) => {
                    log::debug!("Session: could not parse {line:?}");
                    writeln!(output, "unknown command: {} (try `help`)", line.trim())?;
                    true
                }
            };
            self.flush_notifications(output)?;
            if !keep_going {
                return Ok(());
            }
            self.show_prompt(output)?;
        }
        Ok(())
    }

    /// Returns `false` once the session should end.
    fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> std::io::Result<bool> {
        match command {
            Command::Value(text) => self.simulator.set_value_input(&text),
            Command::Assign(text) => {
                if let Some(text) = text {
                    self.simulator.set_value_input(&text);
                }
                if self.simulator.is_full() {
                    writeln!(output, "Assign is disabled while memory is full.")?;
                } else if let Some(address) = self.simulator.assign() {
                    writeln!(output, "wrote to {}", hex::address(address))?;
                    write!(output, "{}", self.simulator.view())?;
                }
            }
            Command::Read(text) => {
                self.simulator.set_address_input(&text);
                if let Err(error) = self.simulator.lookup() {
                    log::debug!("Session: {error}");
                }
            }
            Command::Free => {
                self.simulator.reset();
                write!(output, "{}", self.simulator.view())?;
            }
            Command::Show => write!(output, "{}", self.simulator.view())?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn flush_notifications<W: Write>(&mut self, output: &mut W) -> std::io::Result<()> {
        for notification in self.notifications.take() {
            writeln!(output, "{notification}")?;
        }
        Ok(())
    }

    fn show_prompt<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        if self.prompt {
            write!(output, "> ")?;
            output.flush()?;
        }
        Ok(())
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let prompt = args.script.is_none() && std::io::stdin().is_terminal();
    let mut session = match Session::new(args.size, args.picker(), prompt) {
        Ok(session) => session,
        Err(error) => {
            eprintln!("Could not start the simulator: {error}");
            std::process::exit(1);
        }
    };

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => match std::fs::File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(error) => {
                eprintln!("Could not read script file: {error}");
                std::process::exit(1);
            }
        },
        None => Box::new(std::io::stdin().lock()),
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(error) = session.run(input, &mut stdout) {
        eprintln!("Session failed: {error}");
        std::process::exit(1);
    }
}
