use txlang::codegen;
use txlang::lexer::tokenize;
use txlang::parser::parse;
use txlang::runner;
use txlang::validation::validate;

use anyhow::{Context, bail};
use clap::Parser;
use yansi::Paint;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Compile a tx program to TypeScript and run it.
#[derive(Parser, Debug)]
#[command(name = "tx", version)]
struct Cli {
    /// Source file to compile
    file: PathBuf,

    /// Print the generated TypeScript to stdout instead of running it
    #[arg(long)]
    emit: bool,

    /// Write the generated file but don't execute it
    #[arg(long)]
    no_run: bool,

    /// Where the generated TypeScript is written
    #[arg(short, long, default_value = runner::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Command that executes the generated file
    #[arg(long, default_value = runner::DEFAULT_RUNNER)]
    runner: String,

    #[arg(long)]
    dump_tokens: bool,

    #[arg(long)]
    dump_ast: bool,

    /// Log each stage to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn fail(err: anyhow::Error) -> ExitCode {
    eprintln!("{} {:#}", "error:".red().bold(), err);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match compile_and_run(&cli) {
        Ok(code) => code,
        Err(err) => fail(err),
    }
}

fn compile_and_run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let filepath = cli.file.display().to_string();
    let contents =
        fs::read_to_string(&cli.file).with_context(|| format!("reading {}", filepath))?;

    let tokens = tokenize(&contents);
    if cli.dump_tokens {
        eprintln!("{}", "=== Tokens ===".cyan().bold());
        for token in &tokens {
            eprintln!("  {:?}", token);
        }
    }

    let ast = match validate(&tokens).and_then(|()| parse(&tokens)) {
        Ok(ast) => ast,
        Err(error) => {
            if error.eprint(&filepath, &contents).is_err() {
                eprintln!("{}", error);
            }
            bail!("could not compile {}", filepath);
        }
    };
    if cli.dump_ast {
        eprintln!("{}", "=== AST ===".cyan().bold());
        eprintln!("{:#?}", ast);
    }

    let code = codegen::generate(&ast);
    if cli.verbose {
        eprintln!(
            "{} {} ({} tokens, {} statements)",
            "compiled".green().bold(),
            filepath,
            tokens.len(),
            ast.len()
        );
    }

    if cli.emit {
        print!("{}", code);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.no_run {
        runner::write_output(&code, &cli.output)
            .with_context(|| format!("writing {}", cli.output.display()))?;
        if cli.verbose {
            eprintln!("{} {}", "wrote".green().bold(), cli.output.display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    if cli.verbose {
        eprintln!(
            "{} {} {}",
            "running".green().bold(),
            cli.runner,
            cli.output.display()
        );
    }
    let status = runner::run(&code, &cli.output, &cli.runner)
        .with_context(|| format!("running '{}' on {}", cli.runner, cli.output.display()))?;
    if status.success() {
        return Ok(ExitCode::SUCCESS);
    }
    let code = status.code().and_then(|c| u8::try_from(c).ok()).unwrap_or(1);
    Ok(ExitCode::from(code))
}
