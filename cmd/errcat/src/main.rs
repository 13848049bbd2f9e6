//! errcat: inspect fsmon error classification
//!
//! Usage:
//!   errcat <domain> <value>          message + canonical kind
//!   errcat <domain> <value> <kind>   equivalence test (exit 0 = yes, 1 = no)
//!   errcat --kinds | --domains       list names
//!
//! Domains: fsmon, posix, system, inotify. For `fsmon` the value may be a
//! kind name. Set FSMON_LOG_LEVEL=trace with FSMON_ERRORS_TRACE=1 to see
//! each decision.

use std::process::ExitCode;

use fsmon_errors::code::parse_value;
use fsmon_errors::{generic_domain, DomainId, ErrorKind, ErrorsResult, RawErrorCode};
use fsmon_errors_core::{kdebug, kerror};

const USAGE: &str = "usage: errcat <domain> <value> [kind] | --kinds | --domains";

enum Command {
    Kinds,
    Domains,
    Describe(RawErrorCode),
    Test(RawErrorCode, ErrorKind),
}

fn parse_args(args: &[String]) -> ErrorsResult<Option<Command>> {
    let cmd = match args {
        [flag] if flag == "--kinds" => Command::Kinds,
        [flag] if flag == "--domains" => Command::Domains,
        [domain, value] => Command::Describe(parse_code(domain, value)?),
        [domain, value, kind] => Command::Test(parse_code(domain, value)?, kind.parse()?),
        _ => return Ok(None),
    };
    Ok(Some(cmd))
}

fn parse_code(domain: &str, value: &str) -> ErrorsResult<RawErrorCode> {
    let domain: DomainId = domain.parse()?;
    Ok(RawErrorCode::new(domain, parse_value(domain, value)?))
}

fn describe(code: RawErrorCode) {
    println!("domain:  {}", code.domain());
    println!("value:   {}", code.value());
    if code.domain().renders_text() {
        println!("message: {}", code.message());
    }
    match code.kind() {
        Some(kind) => println!("kind:    {}", kind),
        None => println!("kind:    unrecognized"),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match parse_args(&args) {
        Ok(Some(cmd)) => cmd,
        Ok(None) => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
        Err(e) => {
            kerror!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match cmd {
        Command::Kinds => {
            for kind in ErrorKind::ALL {
                println!("{}\t{}", kind.as_raw(), kind);
            }
        }
        Command::Domains => {
            for id in DomainId::ALL {
                println!("{}", id);
            }
        }
        Command::Describe(code) => describe(code),
        Command::Test(code, kind) => {
            let hit = generic_domain().equivalent(code, kind);
            kdebug!("{}:{} ~ {} => {}", code.domain(), code.value(), kind, hit);
            println!("{}", hit);
            if !hit {
                return ExitCode::from(1);
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_describe() {
        match parse_args(&args(&["inotify", "28"])) {
            Ok(Some(Command::Describe(code))) => assert_eq!(code, RawErrorCode::inotify(28)),
            _ => panic!("expected describe"),
        }
    }

    #[test]
    fn test_parse_test() {
        match parse_args(&args(&["posix", "13", "permission_denied"])) {
            Ok(Some(Command::Test(code, kind))) => {
                assert_eq!(code, RawErrorCode::posix(13));
                assert_eq!(kind, ErrorKind::PermissionDenied);
            }
            _ => panic!("expected test"),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["posix", "x"])).is_err());
        assert!(parse_args(&args(&["dos", "5"])).is_err());
        assert!(parse_args(&args(&["posix", "5", "sad"])).is_err());
        assert!(matches!(parse_args(&args(&[])), Ok(None)));
        assert!(matches!(parse_args(&args(&["--kinds"])), Ok(Some(Command::Kinds))));
    }
}
