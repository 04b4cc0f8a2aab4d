use nom::{
    bytes::complete::{tag, take},
    multi::{many1, many_till},
    number::complete::{be_u32, le_u16, u8},
    sequence::tuple,
    IResult,
};

pub const SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";

#[derive(Debug)]
pub struct RawChunk<'a> {
    pub chunk_type: &'a [u8],
    pub data: &'a [u8],
    pub crc: u32,
    /// Tag plus payload, the range the CRC covers.
    pub checked: &'a [u8],
}

fn parse_chunk(input: &[u8]) -> IResult<&[u8], RawChunk<'_>> {
    let (input, length) = be_u32(input)?;
    let (rest, (checked, crc)) = tuple((take(length as usize + 4), be_u32))(input)?;
    Ok((
        rest,
        RawChunk {
            chunk_type: &checked[..4],
            data: &checked[4..],
            crc,
            checked,
        },
    ))
}

pub fn parse_png(input: &[u8]) -> IResult<&[u8], Vec<RawChunk<'_>>> {
    let (input, _) = tag(SIGNATURE)(input)?;
    many1(parse_chunk)(input)
}

#[derive(Debug)]
pub struct StoredBlock<'a> {
    pub is_final: bool,
    pub len: u16,
    pub nlen: u16,
    pub data: &'a [u8],
}

fn stored_block(input: &[u8]) -> IResult<&[u8], StoredBlock<'_>> {
    let (input, (flag, len, nlen)) = tuple((u8, le_u16, le_u16))(input)?;
    let (input, data) = take(len as usize)(input)?;
    Ok((
        input,
        StoredBlock {
            is_final: flag == 1,
            len,
            nlen,
            data,
        },
    ))
}

/// Splits an IDAT payload into zlib header, stored blocks and Adler-32 trailer.
pub fn parse_zlib_stored(input: &[u8]) -> IResult<&[u8], (&[u8], Vec<StoredBlock<'_>>, u32)> {
    let (input, header) = take(2usize)(input)?;
    let (input, (blocks, adler)) = many_till(stored_block, trailer)(input)?;
    Ok((input, (header, blocks, adler)))
}

fn trailer(input: &[u8]) -> IResult<&[u8], u32> {
    let (rest, adler) = be_u32(input)?;
    if rest.is_empty() {
        Ok((rest, adler))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Eof,
        )))
    }
}
