pub(crate) use files::{
    read_bytes_from_file, read_from_json_file, read_validated_identity,
    write_json_to_file_or_stdout,
};

mod files;
