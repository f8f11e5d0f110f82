use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&JsonOut { ok, data })?);
    Ok(())
}

pub fn print_out<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(ok, data)
    } else {
        println!("{}", text(&data));
        Ok(())
    }
}
