use crate::cd::Msf;
use crate::cue::error::{DirectiveError, DirectiveResult};
use crate::cue::line::{find_ignore_ascii_case, leading_int, skip_token};
use lazy_static::lazy_static;

const INDEX_KEYWORD: &str = "INDEX";

/// Reads the position of an `INDEX 01` line. Any other index number is rejected.
pub(crate) fn parse_index_one(line: &str) -> DirectiveResult<Msf> {
    lazy_static! {
        static ref MSF_RE: regex::Regex =
            regex::Regex::new(r"^(?P<minutes>\d+):(?P<seconds>\d+):(?P<frames>\d+)")
                .expect("MSF pattern is valid");
    }

    let keyword_at =
        find_ignore_ascii_case(line, INDEX_KEYWORD).ok_or(DirectiveError::MissingIndexKeyword)?;
    let rest = line[keyword_at + INDEX_KEYWORD.len()..].trim_start();

    let number = leading_int(rest);
    if number != 1 {
        return Err(DirectiveError::NotIndexOne(number));
    }

    let timestamp = skip_token(rest);
    let invalid = || DirectiveError::InvalidTimestamp(timestamp.to_string());
    let captures = MSF_RE.captures(timestamp).ok_or_else(invalid)?;
    let field = |name: &str| captures[name].parse::<u32>().map_err(|_| invalid());

    Ok(Msf::new(field("minutes")?, field("seconds")?, field("frames")?))
}

/// Start of an `INDEX 01` line in PCM sample frames at `sample_rate`.
pub(crate) fn index_one_sample_frame(line: &str, sample_rate: u32) -> DirectiveResult<u64> {
    let position = parse_index_one(line)?;

    position
        .to_sample_frame(sample_rate)
        .ok_or_else(|| DirectiveError::InvalidTimestamp(position.to_string()))
}
