pub type CmdResult<T> = asset_tools::Result<(T, i32)>;

pub mod rename;
