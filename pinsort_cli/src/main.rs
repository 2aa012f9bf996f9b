use std::{
    env, fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

use pinsort_core::sort::{KeySpec, sort};

struct Opts {
    reverse: bool,
    column: Option<usize>,
    input: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let opts = parse_args();
    let text = read_input(opts.input.as_deref())?;
    let lines: Vec<String> = text.lines().map(str::to_owned).collect();

    let by_column;
    let key = match opts.column {
        Some(col) => {
            by_column = move |line: &String| line.split('\t').nth(col).map(str::to_owned);
            KeySpec::Extract(&by_column)
        }
        None => KeySpec::Whole,
    };

    let sorted = sort(lines, key, opts.reverse)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let mut out = io::stdout().lock();
    for line in &sorted {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn parse_args() -> Opts {
    let mut opts = Opts {
        reverse: false,
        column: None,
        input: None,
    };
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-r" | "--reverse" => opts.reverse = true,
            "--col" => {
                let Some(n) = args.next().and_then(|s| s.parse::<usize>().ok()) else {
                    print_help();
                };
                opts.column = Some(n);
            }
            "-h" | "--help" => print_help(),
            _ => opts.input = Some(PathBuf::from(a)),
        }
    }
    opts
}

fn print_help() -> ! {
    println!(
        "用法：pinsort_cli [--reverse|-r] [--col <n>] [file]\n按拼音字母序对行排序（声调并入字母表）。--col 按第 n 列（TAB 分隔，0 起）取 key；省略 file 则读 stdin。"
    );
    process::exit(0);
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
