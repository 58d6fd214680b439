use anyhow::Result;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    print!("{}", ctx.seeded_schema().sdl());
    Ok(())
}
