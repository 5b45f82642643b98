use one_water_frontend::config::ViewConfig;

fn main() {
    one_water_frontend::run(ViewConfig::default());
}
