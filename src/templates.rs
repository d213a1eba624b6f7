use minijinja::Environment;

pub const INDEX: &str = "index.html";
pub const ORDER: &str = "order.html";
pub const CONFIRMATION: &str = "confirmation.html";

/// Compiles the page templates. Names ending in `.html` are auto-escaped.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(INDEX, include_str!("../templates/index.html"))?;
    env.add_template(ORDER, include_str!("../templates/order.html"))?;
    env.add_template(CONFIRMATION, include_str!("../templates/confirmation.html"))?;
    Ok(env)
}
