use crate::FlatBody;
use crate::wire::error::DecodeError;
use crate::wire::reader::WireReader;
use crate::wire::writer::WireWriter;

/// Fields are positional, not tagged; this order is the wire contract.
pub(crate) fn parse_flat_body(reader: &mut WireReader<'_>) -> Result<FlatBody, DecodeError> {
    let numbers = reader.read_sequence(|r| r.read_long())?;
    let z = reader.read_bool()?;
    let str_array = reader.read_sequence(|r| r.read_string())?;
    let int_array = reader.read_sequence(|r| r.read_long())?;
    Ok(FlatBody {
        numbers,
        z,
        str_array,
        int_array,
    })
}

pub(crate) fn write_flat_body(writer: &mut WireWriter, body: &FlatBody) {
    writer.write_sequence(&body.numbers, |w, n| w.write_long(*n));
    writer.write_bool(body.z);
    writer.write_sequence(&body.str_array, |w, s| w.write_str(s));
    writer.write_sequence(&body.int_array, |w, n| w.write_long(*n));
}
