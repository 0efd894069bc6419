#[actix_web::main]
async fn main() -> std::io::Result<()> {
    lapas_cuti_server::run().await
}
