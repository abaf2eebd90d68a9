use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space1};
use nom::combinator::{all_consuming, map, map_res, rest};
use tracing::warn;

use crate::error::CliqueError;
use crate::graph::Graph;


/// a single (non empty) line of a DIMACS file
#[derive(Debug, PartialEq, Eq)]
enum DimacsLine {
    Comment,
    /// p edge <n> <m>
    Header(usize, usize),
    /// e <u> <v> (1-based)
    Edge(usize, usize),
}

/// reads an instance from file
pub fn read_from_file(filename:&str) -> Result<Graph, CliqueError> {
    let content = fs::read_to_string(filename).map_err(|source| CliqueError::Io {
        path: filename.to_string(),
        source,
    })?;
    parse_dimacs(&content)
}

/** parses the content of a DIMACS file.
The declared number of edges is only checked (some files count both directions).
*/
pub fn parse_dimacs(content:&str) -> Result<Graph, CliqueError> {
    let mut graph:Option<Graph> = None;
    let mut declared_m = 0;
    for (i, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() { continue; }
        let parsed = match read_line(line) {
            Ok((_, parsed)) => parsed,
            Err(_) => return Err(CliqueError::Parse {
                line: i+1,
                reason: format!("unrecognized line '{}'", line),
            }),
        };
        match parsed {
            DimacsLine::Comment => {},
            DimacsLine::Header(n, m) => {
                if graph.is_some() {
                    return Err(CliqueError::Parse { line: i+1, reason: "duplicated header".to_string() });
                }
                graph = Some(Graph::new(n));
                declared_m = m;
            },
            DimacsLine::Edge(u, v) => {
                let g = graph.as_mut().ok_or(CliqueError::MissingHeader)?;
                let n = g.nb_vertices();
                for id in [u,v].iter() {
                    if *id == 0 || *id > n {
                        return Err(CliqueError::VertexOutOfRange { vertex: *id, n });
                    }
                }
                // edges in DIMACS files can repeat
                g.add_edge(u-1, v-1);
            },
        }
    }
    let res = graph.ok_or(CliqueError::MissingHeader)?;
    if res.nb_edges() != declared_m && 2*res.nb_edges() != declared_m {
        warn!("header announces {} edges, {} distinct edges read", declared_m, res.nb_edges());
    }
    Ok(res)
}

/// reads a non-negative integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers, each preceded by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    let (s, _) = space1(s)?;
    let (s, a) = integer(s)?;
    let (s, _) = space1(s)?;
    let (s, b) = integer(s)?;
    Ok((s, (a,b)))
}

/// reads a comment line
fn read_comment(s:&str) -> IResult<&str, DimacsLine> {
    let (s, _) = char('c')(s)?;
    map(rest, |_| DimacsLine::Comment)(s)
}

/// reads header containing (n,m)
fn read_header(s:&str) -> IResult<&str, DimacsLine> {
    let (s, _) = char('p')(s)?;
    let (s, _) = space1(s)?;
    let (s, _) = alt((tag("edge"), tag("col"), tag("clq")))(s)?;
    let (s, (n,m)) = read_two_integers(s)?;
    Ok((s, DimacsLine::Header(n, m)))
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
fn read_edge(s:&str) -> IResult<&str, DimacsLine> {
    let (s, _) = char('e')(s)?;
    let (s, (u,v)) = read_two_integers(s)?;
    Ok((s, DimacsLine::Edge(u, v)))
}

/// reads a whole (trimmed) line
fn read_line(s:&str) -> IResult<&str, DimacsLine> {
    all_consuming(alt((read_comment, read_header, read_edge)))(s)
}
