use crate::{context::AppContext, generation::TextGenerator, info};

pub async fn chat(ctx: &AppContext, message: String) {
    let pb = super::spinner("Thinking...");
    let reply = ctx.generator.chat(&message).await;
    pb.finish_and_clear();

    info!("{}", reply.text);
}
