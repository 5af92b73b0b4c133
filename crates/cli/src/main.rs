//! MIPS softcore integration model CLI.

use clap::Parser;
use pyo3::prelude::*;
use pyo3::types::PyList;
use std::ffi::CString;
use std::str::FromStr;
use std::{fs, process};

use coregate::config::Config;
use coregate::cores::CoreKind;
use coregate::sim::{self, ResetScenario};
use coregate::soc::System;

#[derive(Parser, Debug)]
#[command(
    name = "coregate",
    author,
    version,
    about = "MIPS softcore SoC-integration model",
    long_about = None,
)]
struct Cli {
    /// Core to instantiate ("i6500" or "mipsfpga").
    #[arg(short = 'c', long, conflicts_with_all = ["script", "list"])]
    core: Option<String>,

    /// TOML run configuration.
    #[arg(long, requires = "core")]
    config: Option<String>,

    /// Print the core's integration data instead of running.
    #[arg(long, requires = "core")]
    info: bool,

    /// Emit the integration data as JSON (requires --info).
    #[arg(long, requires = "info")]
    json: bool,

    /// List the supported cores.
    #[arg(long, conflicts_with = "script")]
    list: bool,

    /// Maximum ticks to run before giving up on the release.
    #[arg(long, default_value_t = 1024)]
    ticks: u64,

    /// Assert the external reset at this tick (repeatable).
    #[arg(long = "reset-at", value_name = "TICK")]
    reset_at: Vec<u64>,

    /// Python script to run against the model (SoC-builder style).
    #[arg(long, conflicts_with = "core")]
    script: Option<String>,

    /// Arguments passed to the script as sys.argv[1:].
    #[arg(
        allow_hyphen_values = true,
        trailing_var_arg = true,
        requires = "script"
    )]
    script_args: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(script) = cli.script {
        run_python_script(&script, cli.script_args);
    } else if cli.list {
        cmd_list();
    } else if let Some(core) = cli.core {
        let kind = parse_core(&core);
        if cli.info {
            cmd_info(kind, cli.json);
        } else {
            cmd_run(kind, cli.config, cli.ticks, cli.reset_at);
        }
    } else {
        eprintln!(
            "\n\x1b[1;31merror:\x1b[0m one of \x1b[1m--core\x1b[0m, \x1b[1m--list\x1b[0m, or \x1b[1m--script\x1b[0m is required\n"
        );
        eprintln!("\x1b[1;33mUsage:\x1b[0m");
        eprintln!(
            "  \x1b[1;36mcoregate \x1b[0m \x1b[32m--core\x1b[0m <name> [\x1b[32m--config\x1b[0m cfg.toml] [\x1b[32m--reset-at\x1b[0m T]   \x1b[2mPower-up run\x1b[0m"
        );
        eprintln!(
            "  \x1b[1;36mcoregate \x1b[0m \x1b[32m--core\x1b[0m <name> \x1b[32m--info\x1b[0m [\x1b[32m--json\x1b[0m]                    \x1b[2mIntegration data\x1b[0m"
        );
        eprintln!(
            "  \x1b[1;36mcoregate \x1b[0m \x1b[32m--script\x1b[0m <script.py> [args...]                   \x1b[2mPython script\x1b[0m"
        );
        eprintln!();
        eprintln!("Run \x1b[1mcoregate --help\x1b[0m for full usage information.");
        process::exit(1);
    }
}

fn parse_core(name: &str) -> CoreKind {
    CoreKind::from_str(name).unwrap_or_else(|e| {
        eprintln!("\x1b[1;31merror:\x1b[0m {} (try --list)", e);
        process::exit(1);
    })
}

fn load_config(path: Option<String>) -> Config {
    match path {
        Some(path) => {
            let content = fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("\x1b[1;31merror:\x1b[0m reading {}: {}", path, e);
                process::exit(1);
            });
            toml::from_str(&content).unwrap_or_else(|e| {
                eprintln!("\x1b[1;31merror:\x1b[0m parsing {}: {}", path, e);
                process::exit(1);
            })
        }
        None => Config::default(),
    }
}

fn cmd_list() {
    for kind in CoreKind::ALL {
        let descriptor = kind.descriptor();
        println!(
            "{:<10} {} ({}-bit, {} bus)",
            descriptor.name,
            descriptor.human_name,
            descriptor.data_width,
            descriptor.bus.name(),
        );
    }
}

fn cmd_info(kind: CoreKind, json: bool) {
    let descriptor = kind.descriptor();

    if json {
        let out = serde_json::to_string_pretty(descriptor).unwrap_or_else(|e| {
            eprintln!("\x1b[1;31merror:\x1b[0m serializing descriptor: {}", e);
            process::exit(1);
        });
        println!("{}", out);
        return;
    }

    println!("Core:            {} ({})", descriptor.name, descriptor.human_name);
    println!("Family:          {} {}", descriptor.category, descriptor.family);
    println!("Variants:        {}", descriptor.variants.join(", "));
    println!("Data width:      {}", descriptor.data_width);
    println!("Endianness:      {:?}", descriptor.endianness);
    println!("GCC triple:      {}", descriptor.gcc.triple);
    println!("GCC flags:       {}", descriptor.gcc_flags());
    println!("Linker format:   {}", descriptor.linker_output_format);
    println!("Peripheral bus:  {} ({}-bit)", descriptor.bus.name(), descriptor.bus.data_width());
    println!("Interrupt lines: {}", descriptor.interrupt_lines);
    println!("Memory map:");
    for segment in descriptor.mem_map {
        println!("  {:<10} {:#010x}", segment.name, segment.base);
    }
    println!("IO regions:");
    for region in descriptor.io_regions {
        println!("  {:#010x} + {:#010x}", region.origin, region.length);
    }
}

fn cmd_run(kind: CoreKind, config_path: Option<String>, ticks: u64, reset_at: Vec<u64>) {
    let config = load_config(config_path);
    let mut system = System::new(kind, &config).unwrap_or_else(|e| {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", e);
        process::exit(1);
    });

    let scenario = ResetScenario::new(reset_at);
    let report = sim::run(&mut system, &scenario, ticks);

    match report.release_tick {
        Some(tick) => println!("\n[*] Cluster released at tick {}", tick),
        None => println!("\n[!] Cluster still held after {} ticks", report.ticks_run),
    }
    system.cpu.stats.print();
    if report.release_tick.is_none() {
        process::exit(1);
    }
}

fn run_python_script(script_path: &str, script_args: Vec<String>) {
    let script_content = fs::read_to_string(script_path).unwrap_or_else(|e| {
        eprintln!("Error reading script {}: {}", script_path, e);
        process::exit(1);
    });

    Python::with_gil(|py| {
        let sys = py.import("sys").expect("sys");
        let path = sys.getattr("path").expect("path");
        // Add repo root so a pure-Python `coregate/` package is importable.
        path.call_method1("insert", (0, ".")).expect("path.insert");

        // Inject the compiled Rust extension as `coregate._core` so that
        // `coregate/__init__.py` can re-export it without a circular import.
        let m = PyModule::new(py, "coregate._core").expect("module");
        _core::register_core_module(&m).expect("register");
        let modules = sys.getattr("modules").expect("modules");
        modules.set_item("coregate._core", m).expect("inject");

        let mut full_args = vec![script_path.to_string()];
        full_args.extend(script_args);
        let py_args = PyList::new(py, &full_args).expect("argv");
        sys.setattr("argv", py_args).expect("argv");

        let code_c = CString::new(script_content).expect("code");
        let file_c = CString::new(script_path).expect("file");
        let name_c = CString::new("__main__").unwrap();

        let result = PyModule::from_code(py, &code_c, &file_c, &name_c);
        if let Err(e) = result {
            e.print(py);
            process::exit(1);
        }
    });
}
