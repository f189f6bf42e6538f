use crate::context::AppContext;
use anyhow::Result;
use colored::Colorize;

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let credential = ctx.auth.login(email, password).await?;
    println!("{}", format!("Logged in as {}", credential.user.email).green());
    Ok(())
}

pub async fn register(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let credential = ctx.auth.register(email, password).await?;
    println!("{}", format!("Registered {}", credential.user.email).green());
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.auth.logout().await?;
    println!("Logged out");
    Ok(())
}
