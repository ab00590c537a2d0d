// This file is part of barista-throwdown.
//
// barista-throwdown is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// barista-throwdown is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{fs, io, path::PathBuf, thread};

use clap::Parser;
use log::info;

use barista_throwdown::{config::Config, tournament::SharedTournament, utils};

/// Barista Throwdown
///
/// Runs a coffee throwdown over the line protocol on stdin. Enter
/// 'list_commands' for a list of commands.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// A RON tournament config (stations and segment durations)
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,

    /// Print committed events as they happen
    #[arg(long)]
    events: bool,

    /// Log without timestamps, for journals that stamp lines themselves
    #[arg(long)]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.plain);

    let config = match args.config {
        Some(path) => Config::from_ron(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };

    let tournament = SharedTournament::new(config);

    if args.events {
        let events = tournament.subscribe();
        thread::spawn(move || {
            for event in events {
                info!("{event}");
            }
        });
    }

    let mut buffer = String::new();
    let stdin = io::stdin();

    loop {
        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(());
        }

        match tournament.read_line(&buffer) {
            Err(error) => println!("? {error}"),
            Ok(message) => {
                if let Some(message) = message {
                    println!("= {message}");
                }
            }
        }
    }
}
