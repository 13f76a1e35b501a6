// dsatty: step-through visualizer for stacks, queues, linked lists and algorithms

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use dsatty::constants::DEFAULT_SNAPSHOT_LIMIT;
use dsatty::demos::Demo;
use dsatty::player::Player;
use dsatty::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <demo> [--plain]", program_name);
    eprintln!("       {} --all --plain", program_name);
    eprintln!("       {} --list", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {} circular-queue          # Step through the circular buffer",
        program_name
    );
    eprintln!(
        "  {} hanoi --plain           # Print every step to stdout",
        program_name
    );
    eprintln!();
    eprintln!("Run with --list to see every demo.");
}

fn print_demo_list() {
    for demo in Demo::ALL {
        println!("  {:<16} {}", demo.name(), demo.description());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("dsatty");

    let mut plain = false;
    let mut all = false;
    let mut demo_name: Option<&str> = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--list" => {
                print_demo_list();
                return Ok(());
            }
            "--plain" => plain = true,
            "--all" => all = true,
            flag if flag.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", flag);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
            name if demo_name.is_none() => demo_name = Some(name),
            extra => {
                eprintln!("Error: Unexpected argument '{}'", extra);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
        }
    }

    let demos: Vec<Demo> = match (all, demo_name) {
        (true, None) if plain => Demo::ALL.to_vec(),
        (true, _) => {
            eprintln!("Error: --all needs --plain and takes no demo name");
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
        (false, Some(name)) => match Demo::from_name(name) {
            Some(demo) => vec![demo],
            None => {
                eprintln!("Error: Unknown demo '{}'", name);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
        },
        (false, None) => {
            eprintln!("Error: No demo provided");
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    if plain {
        for demo in demos {
            eprintln!("Recording {}...", demo.name());
            let trace = match demo.run(DEFAULT_SNAPSHOT_LIMIT) {
                Ok(trace) => trace,
                Err(e) => {
                    eprintln!("Recording error: {}", e);
                    std::process::exit(1);
                }
            };
            eprintln!("Total snapshots: {}", trace.len());
            println!("{}", trace.render_plain());
        }
        return Ok(());
    }

    let demo = demos[0];
    eprintln!("Recording {}...", demo.name());
    let trace = match demo.run(DEFAULT_SNAPSHOT_LIMIT) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Recording error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!("Total snapshots: {}", trace.len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Player::new(trace));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
