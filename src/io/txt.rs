//! Plain-text topomesh format.
//!
//! # Format
//! ```text
//! BEGIN topomesh degree 2
//! BEGIN description
//! any text
//! END description
//! BEGIN wisp degree 0
//! id 0
//! id 1
//! END wisp degree 0
//! ...
//! BEGIN decomposition
//! link degree 1 wid 2 bid 0
//! END decomposition
//! END topomesh
//! ```
//! One `BEGIN wisp` block per degree `0..=D`; a `link` line names the upper
//! wisp (`wid`, of the given degree) and one of its borders (`bid`). Blank
//! lines are ignored, as is anything before `BEGIN topomesh`, except inside
//! the description block, whose lines are returned verbatim. The header
//! degree may not exceed [`TopomeshOptions::DEGREE_LIMIT`].
//!
//! [`TopomeshOptions::DEGREE_LIMIT`]: crate::topology::topomesh::TopomeshOptions::DEGREE_LIMIT
//!
//! # Limitations
//! - Only the structure is stored; no attributes.
//! - Link order within a wisp follows `Topomesh` insertion order on write and
//!   file order on read.

use crate::io::{MeshData, TopomeshReader, TopomeshWriter};
use crate::mesh_error::MeshError;
use crate::topology::topomesh::{Incidence, MutableIncidence, Topomesh};
use crate::topology::wisp::{Degree, WispId};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Writer for the plain-text format.
#[derive(Debug, Default, Clone)]
pub struct TxtWriter;

/// Reader for the plain-text format.
#[derive(Debug, Default, Clone)]
pub struct TxtReader;

impl TopomeshWriter for TxtWriter {
    fn write<W: Write>(
        &self,
        mut writer: W,
        mesh: &Topomesh,
        description: &[String],
    ) -> Result<(), MeshError> {
        let top = mesh.max_degree();
        writeln!(writer, "BEGIN topomesh degree {top}")?;
        writeln!(writer)?;
        writeln!(writer, "BEGIN description")?;
        for line in description {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer, "END description")?;
        writeln!(writer)?;

        for degree in 0..=top {
            writeln!(writer, "BEGIN wisp degree {degree}")?;
            for w in mesh.wisp_iter(Some(degree))? {
                writeln!(writer, "id {w}")?;
            }
            writeln!(writer, "END wisp degree {degree}")?;
        }

        writeln!(writer, "BEGIN decomposition")?;
        for degree in 1..=top {
            for w in mesh.wisp_iter(Some(degree))? {
                for b in mesh.border_slice(w)? {
                    writeln!(writer, "link degree {degree} wid {w} bid {b}")?;
                }
            }
        }
        writeln!(writer, "END decomposition")?;
        writeln!(writer, "END topomesh")?;
        writer.flush()?;
        Ok(())
    }
}

impl TxtReader {
    fn parse_num<T: std::str::FromStr>(raw: Option<&str>, what: &str) -> Result<T, MeshError> {
        let raw = raw.ok_or_else(|| MeshError::MeshIoParse(format!("missing {what}")))?;
        raw.parse::<T>()
            .map_err(|_| MeshError::MeshIoParse(format!("invalid {what}: {raw}")))
    }

    /// Parses `BEGIN <kind> degree <d>` / `END <kind> degree <d>`.
    fn parse_tagged_degree(line: &str, tag: &str, kind: &str) -> Result<Option<Degree>, MeshError> {
        let mut parts = line.split_whitespace();
        if parts.next() != Some(tag) || parts.next() != Some(kind) {
            return Ok(None);
        }
        if parts.next() != Some("degree") {
            return Err(MeshError::MeshIoParse(format!("expected degree in `{line}`")));
        }
        Self::parse_num(parts.next(), "degree").map(Some)
    }

    /// Next non-blank line, trimmed.
    fn next_structural<'a>(raw: &mut std::str::Lines<'a>) -> Option<&'a str> {
        raw.by_ref().map(str::trim).find(|l| !l.is_empty())
    }

    fn parse_link(line: &str) -> Result<(Degree, WispId, WispId), MeshError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[..] {
            ["link", "degree", d, "wid", w, "bid", b] => Ok((
                Self::parse_num(Some(d), "link degree")?,
                WispId::new(Self::parse_num(Some(w), "wisp id")?),
                WispId::new(Self::parse_num(Some(b), "border id")?),
            )),
            _ => Err(MeshError::MeshIoParse(format!("malformed link line `{line}`"))),
        }
    }
}

impl TopomeshReader for TxtReader {
    fn read<R: Read>(&self, mut reader: R) -> Result<MeshData, MeshError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        let mut raw = contents.lines();
        let next_line = Self::next_structural;

        let mut mesh = loop {
            let line = next_line(&mut raw)
                .ok_or_else(|| MeshError::MeshIoParse("missing BEGIN topomesh".into()))?;
            if let Some(top) = Self::parse_tagged_degree(line, "BEGIN", "topomesh")? {
                break Topomesh::try_new(top)
                    .map_err(|e| MeshError::MeshIoParse(e.to_string()))?;
            }
        };

        let mut description = Vec::new();
        let mut finished = false;
        while let Some(line) = next_line(&mut raw) {
            if line == "END topomesh" {
                finished = true;
                break;
            }
            if line == "BEGIN description" {
                // Description lines are kept verbatim, blank ones included.
                loop {
                    let l = raw.next().ok_or_else(|| {
                        MeshError::MeshIoParse("missing END description".into())
                    })?;
                    if l.trim() == "END description" {
                        break;
                    }
                    description.push(l.to_string());
                }
            } else if let Some(degree) = Self::parse_tagged_degree(line, "BEGIN", "wisp")? {
                mesh.check_degree(degree)
                    .map_err(|e| MeshError::MeshIoParse(e.to_string()))?;
                loop {
                    let l = next_line(&mut raw).ok_or_else(|| {
                        MeshError::MeshIoParse(format!("missing END wisp degree {degree}"))
                    })?;
                    if let Some(end) = Self::parse_tagged_degree(l, "END", "wisp")? {
                        if end != degree {
                            return Err(MeshError::MeshIoParse(format!(
                                "wisp block of degree {degree} closed as degree {end}"
                            )));
                        }
                        break;
                    }
                    let mut parts = l.split_whitespace();
                    if parts.next() != Some("id") {
                        return Err(MeshError::MeshIoParse(format!("malformed wisp line `{l}`")));
                    }
                    let id: u32 = Self::parse_num(parts.next(), "wisp id")?;
                    mesh.add_wisp(degree, Some(WispId::new(id)))?;
                }
            } else if line == "BEGIN decomposition" {
                loop {
                    let l = next_line(&mut raw).ok_or_else(|| {
                        MeshError::MeshIoParse("missing END decomposition".into())
                    })?;
                    if l == "END decomposition" {
                        break;
                    }
                    let (degree, wid, bid) = Self::parse_link(l)?;
                    let actual = mesh.degree(wid)?;
                    if actual != degree {
                        return Err(MeshError::MeshIoParse(format!(
                            "link line declares wisp {wid} of degree {degree}, found {actual}"
                        )));
                    }
                    mesh.link(bid, wid)?;
                }
            } else {
                log::warn!("skipping unrecognized topomesh line `{line}`");
            }
        }
        if !finished {
            return Err(MeshError::MeshIoParse("missing END topomesh".into()));
        }
        Ok(MeshData { mesh, description })
    }
}

/// Writes `mesh` to `path` in the plain-text format.
pub fn write_topomesh<P: AsRef<Path>>(
    path: P,
    mesh: &Topomesh,
    description: &[String],
) -> Result<(), MeshError> {
    let file = File::create(path)?;
    TxtWriter.write(BufWriter::new(file), mesh, description)
}

/// Reads a topomesh stored at `path` in the plain-text format.
pub fn read_topomesh<P: AsRef<Path>>(path: P) -> Result<MeshData, MeshError> {
    TxtReader.read(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Topomesh {
        let mut m = Topomesh::new(2);
        let v: Vec<_> = (0..3).map(|_| m.add_wisp(0, None).unwrap()).collect();
        let f = m.add_wisp(2, Some(WispId::new(20))).unwrap();
        for i in 0..3 {
            let e = m.add_wisp(1, Some(WispId::new(10 + i as u32))).unwrap();
            m.link_all(e, [v[i], v[(i + 1) % 3]]).unwrap();
            m.link(e, f).unwrap();
        }
        m
    }

    #[test]
    fn writes_expected_layout() {
        let mut m = Topomesh::new(1);
        let a = m.add_wisp(0, None).unwrap();
        let e = m.add_wisp(1, None).unwrap();
        m.link(a, e).unwrap();
        let mut buf = Vec::new();
        TxtWriter.write(&mut buf, &m, &["unit".to_string()]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let expected = "BEGIN topomesh degree 1\n\nBEGIN description\nunit\nEND description\n\n\
                        BEGIN wisp degree 0\nid 0\nEND wisp degree 0\n\
                        BEGIN wisp degree 1\nid 1\nEND wisp degree 1\n\
                        BEGIN decomposition\nlink degree 1 wid 1 bid 0\nEND decomposition\n\
                        END topomesh\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn round_trip_preserves_ids_and_links() {
        let m = triangle();
        let mut buf = Vec::new();
        TxtWriter.write(&mut buf, &m, &[]).unwrap();
        let data = TxtReader.read(buf.as_slice()).unwrap();
        let back = data.mesh;
        assert!(data.description.is_empty());
        assert_eq!(back.max_degree(), 2);
        for d in 0..=2 {
            assert_eq!(back.wisps(Some(d)).unwrap(), m.wisps(Some(d)).unwrap());
        }
        for w in m.wisps(None).unwrap() {
            assert_eq!(back.border_slice(w).unwrap(), m.border_slice(w).unwrap());
        }
        assert_eq!(back.nb_links(), m.nb_links());
    }

    #[test]
    fn rejects_malformed_input() {
        let missing_end = "BEGIN topomesh degree 1\nBEGIN wisp degree 0\nid 0\n";
        assert!(matches!(
            TxtReader.read(missing_end.as_bytes()),
            Err(MeshError::MeshIoParse(_))
        ));
        let bad_id = "BEGIN topomesh degree 1\nBEGIN wisp degree 0\nid x\nEND wisp degree 0\nEND topomesh\n";
        assert!(matches!(
            TxtReader.read(bad_id.as_bytes()),
            Err(MeshError::MeshIoParse(_))
        ));
        let bad_link = "BEGIN topomesh degree 1\nBEGIN wisp degree 0\nid 0\nEND wisp degree 0\n\
                        BEGIN wisp degree 1\nid 1\nEND wisp degree 1\n\
                        BEGIN decomposition\nlink degree 2 wid 1 bid 0\nEND decomposition\nEND topomesh\n";
        assert!(matches!(
            TxtReader.read(bad_link.as_bytes()),
            Err(MeshError::MeshIoParse(_))
        ));
        assert!(matches!(TxtReader.read("".as_bytes()), Err(MeshError::MeshIoParse(_))));
    }

    #[test]
    fn oversized_header_degree_is_a_parse_error() {
        for top in ["18446744073709551615", "99999999999999999999999", "4096"] {
            let text = format!("BEGIN topomesh degree {top}\nEND topomesh\n");
            assert!(matches!(
                TxtReader.read(text.as_bytes()),
                Err(MeshError::MeshIoParse(_))
            ));
        }
    }

    #[test]
    fn description_keeps_indentation_and_blank_lines() {
        let m = triangle();
        let description = vec![
            "header".to_string(),
            "".to_string(),
            "    indented body".to_string(),
            "\ttabbed  ".to_string(),
        ];
        let mut buf = Vec::new();
        TxtWriter.write(&mut buf, &m, &description).unwrap();
        let data = TxtReader.read(buf.as_slice()).unwrap();
        assert_eq!(data.description, description);
    }

    #[test]
    fn store_errors_surface_unchanged() {
        let dup = "BEGIN topomesh degree 0\nBEGIN wisp degree 0\nid 3\nid 3\nEND wisp degree 0\nEND topomesh\n";
        assert_eq!(TxtReader.read(dup.as_bytes()).unwrap_err(), MeshError::IdInUse(3));
    }
}
