use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpStream;

use log::debug;

use crate::config::ServerAddr;

use super::error::MpdError;
use super::response::{Record, parse_records, quote_arg};

/// What the query layer needs from the daemon.
///
/// `MpdClient` is the real implementation; tests substitute an in-memory
/// fake.
pub trait Catalog {
    /// Full database listing (`listallinfo`).
    fn list_all(&mut self) -> Result<Vec<Record>, MpdError>;

    /// Records matching every `(tag, value)` criterion (`find`).
    fn find(&mut self, criteria: &[(&str, &str)]) -> Result<Vec<Record>, MpdError>;
}

/// Blocking client for the daemon's line-based protocol.
///
/// One TCP connection serves the whole run; commands are issued strictly in
/// sequence.
pub struct MpdClient {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

impl MpdClient {
    /// Connect, check the greeting, and authenticate when a password is set.
    pub fn connect(addr: &ServerAddr) -> Result<Self, MpdError> {
        let stream = TcpStream::connect((addr.host.as_str(), addr.port))?;
        let reader = BufReader::new(stream.try_clone()?);
        let mut client = Self {
            reader,
            writer: stream,
        };

        let greeting = client.read_line()?;
        let version = greeting
            .strip_prefix("OK MPD ")
            .ok_or_else(|| MpdError::Greeting(greeting.clone()))?;
        debug!("daemon protocol version {version}");

        if let Some(password) = &addr.password {
            client.run(&format!("password {}", quote_arg(password)))?;
        }
        Ok(client)
    }

    fn read_line(&mut self) -> Result<String, MpdError> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            return Err(MpdError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed by server",
            )));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Send one command and collect response lines up to the terminator.
    fn run(&mut self, command: &str) -> Result<Vec<String>, MpdError> {
        self.writer.write_all(command.as_bytes())?;
        self.writer.write_all(b"\n")?;

        let mut lines = Vec::new();
        loop {
            let line = self.read_line()?;
            if line == "OK" {
                return Ok(lines);
            }
            if let Some(ack) = line.strip_prefix("ACK ") {
                return Err(MpdError::Server(ack.to_string()));
            }
            lines.push(line);
        }
    }
}

impl Catalog for MpdClient {
    fn list_all(&mut self) -> Result<Vec<Record>, MpdError> {
        let lines = self.run("listallinfo")?;
        parse_records(&lines)
    }

    fn find(&mut self, criteria: &[(&str, &str)]) -> Result<Vec<Record>, MpdError> {
        let mut command = String::from("find");
        for (tag, value) in criteria {
            command.push(' ');
            command.push_str(tag);
            command.push(' ');
            command.push_str(&quote_arg(value));
        }
        let lines = self.run(&command)?;
        parse_records(&lines)
    }
}
