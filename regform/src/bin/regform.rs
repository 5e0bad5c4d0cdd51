use regform::{
    application::{Application, ApplicationError},
    configuration::Configuration,
    telemetry::{get_subscriber, init_subscriber},
};

fn main() -> Result<(), ApplicationError> {
    let configuration = Configuration::parse("regform")?;

    let subscriber = get_subscriber(
        configuration.telemetry.name.clone(),
        configuration.telemetry.filter.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    Application::build(&configuration).run(stdin.lock(), &mut stdout)
}
