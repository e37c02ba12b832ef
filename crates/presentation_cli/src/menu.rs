//! Interactive menu
//!
//! Reads choices line by line so it can be driven from a pipe as well as
//! from a terminal.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::process::Command;

use application::location_helper::{format_location, maps_search_link};
use application::{ApplicationError, PlaceTypesOutcome, PlaceTypesService};
use domain::Coordinate;
use tracing::debug;

/// Opens a URL with the platform's default handler
pub type LinkOpener = fn(&str) -> io::Result<()>;

/// Menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Show the device location
    CurrentLocation,
    /// Rank place types around the device location
    NearbyHere,
    /// Rank place types around an entered location
    NearbyEntered,
    /// Leave the menu
    Exit,
}

impl MenuChoice {
    /// Parse the first non-blank character of a line
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().chars().next()? {
            '1' => Some(Self::CurrentLocation),
            '2' => Some(Self::NearbyHere),
            '3' => Some(Self::NearbyEntered),
            '4' => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive menu over a place types service
pub struct Menu<'a, R, W> {
    service: &'a PlaceTypesService,
    input: R,
    output: W,
    opener: LinkOpener,
}

impl<R, W> fmt::Debug for Menu<'_, R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("service", self.service)
            .finish_non_exhaustive()
    }
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu reading from `input` and writing to `output`
    pub fn new(service: &'a PlaceTypesService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            opener: open_link,
        }
    }

    /// Replace the function used to open maps links
    #[cfg(test)]
    #[must_use]
    pub fn with_opener(mut self, opener: LinkOpener) -> Self {
        self.opener = opener;
        self
    }

    /// Run until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails;
    /// lookup failures are reported on the output and the menu continues.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\nPress a key to select an option:")?;
            writeln!(self.output, "1: Output current location")?;
            writeln!(self.output, "2: Output nearby place types using current location")?;
            writeln!(self.output, "3: Output nearby place types using inputted location")?;
            writeln!(self.output, "4: Exit")?;

            let Some(line) = self.prompt("Input: ")? else {
                return Ok(());
            };
            writeln!(self.output)?;

            match MenuChoice::parse(&line) {
                Some(MenuChoice::CurrentLocation) => self.show_current_location().await?,
                Some(MenuChoice::NearbyHere) => self.nearby_here().await?,
                Some(MenuChoice::NearbyEntered) => self.nearby_entered().await?,
                Some(MenuChoice::Exit) => return Ok(()),
                None => debug!(input = %line.trim(), "Ignoring unknown menu choice"),
            }
        }
    }

    async fn show_current_location(&mut self) -> io::Result<()> {
        let coordinate = match self.service.current_location().await {
            Ok(coordinate) => coordinate,
            Err(e) => return self.report_error(&e),
        };

        writeln!(self.output, "{}", format_location(&coordinate))?;
        writeln!(
            self.output,
            "y/n: Would you like to view this location in your browser?"
        )?;

        let answer = self.prompt("Input: ")?.unwrap_or_default();
        writeln!(self.output)?;

        if answer.trim().eq_ignore_ascii_case("y") {
            let link = maps_search_link(&coordinate);
            if let Err(e) = (self.opener)(&link) {
                debug!(error = %e, "Failed to open maps link");
                writeln!(self.output, "Could not view this URL in a browser: {link}")?;
            }
        }
        Ok(())
    }

    async fn nearby_here(&mut self) -> io::Result<()> {
        match self.service.find_nearby_place_types_here(None).await {
            Ok((_, outcome)) => write_outcome(&mut self.output, &outcome),
            Err(e) => self.report_error(&e),
        }
    }

    async fn nearby_entered(&mut self) -> io::Result<()> {
        let latitude = self.prompt("Enter a Latitude: ")?;
        let longitude = self.prompt("Enter a Longitude: ")?;

        let coordinate = match Coordinate::parse(latitude.as_deref(), longitude.as_deref()) {
            Ok(coordinate) => coordinate,
            Err(e) => return writeln!(self.output, "{e}"),
        };

        match self.service.find_nearby_place_types(&coordinate, None).await {
            Ok(outcome) => write_outcome(&mut self.output, &outcome),
            Err(e) => self.report_error(&e),
        }
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report_error(&mut self, error: &ApplicationError) -> io::Result<()> {
        writeln!(self.output, "{error}")
    }
}

/// Print a lookup outcome in the `Count: N, Type: label` format
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_outcome(output: &mut impl Write, outcome: &PlaceTypesOutcome) -> io::Result<()> {
    match outcome {
        PlaceTypesOutcome::Found(frequency) => {
            writeln!(output, "\nNearby Place Types:")?;
            for entry in frequency {
                writeln!(output, "{entry}")?;
            }
            Ok(())
        },
        PlaceTypesOutcome::NoResults(reason) => writeln!(output, "{reason}"),
    }
}

/// Open a URL with the platform's default handler
///
/// # Errors
///
/// Returns an error if the opener cannot be started or exits unsuccessfully.
pub fn open_link(url: &str) -> io::Result<()> {
    let status = opener_command(url).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("opener exited with {status}")))
    }
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(url);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use application::{
        DeviceLocationPort, LocationError, NearbyPlace, NearbyPlacesPort, NearbySearchOutcome,
    };
    use async_trait::async_trait;
    use domain::TypeFrequency;

    use super::*;

    struct FixedPlaces(NearbySearchOutcome);

    #[async_trait]
    impl NearbyPlacesPort for FixedPlaces {
        async fn search_nearby(
            &self,
            _coordinate: &Coordinate,
            _radius_meters: u32,
            _included_types: &[String],
        ) -> Result<NearbySearchOutcome, ApplicationError> {
            Ok(self.0.clone())
        }
    }

    struct FixedLocation(Result<Coordinate, LocationError>);

    #[async_trait]
    impl DeviceLocationPort for FixedLocation {
        async fn current_location(&self) -> Result<Coordinate, LocationError> {
            self.0
        }
    }

    fn service(location: Result<Coordinate, LocationError>) -> PlaceTypesService {
        let places = FixedPlaces(NearbySearchOutcome::Places(vec![
            NearbyPlace::with_types(["bar", "cafe"]),
            NearbyPlace::with_types(["bar"]),
        ]));
        PlaceTypesService::new(Arc::new(places), 100)
            .with_device_location(Arc::new(FixedLocation(location)))
    }

    fn paris() -> Coordinate {
        Coordinate::new(48.8584, 2.2945).unwrap()
    }

    async fn run_menu(service: &PlaceTypesService, input: &str, opener: LinkOpener) -> String {
        let mut output = Vec::new();
        Menu::new(service, Cursor::new(input.as_bytes()), &mut output)
            .with_opener(opener)
            .run()
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn opener_ok(_: &str) -> io::Result<()> {
        Ok(())
    }

    fn opener_fails(_: &str) -> io::Result<()> {
        Err(io::Error::other("no browser"))
    }

    #[test]
    fn parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::CurrentLocation));
        assert_eq!(MenuChoice::parse(" 2\n"), Some(MenuChoice::NearbyHere));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::NearbyEntered));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn write_found_outcome() {
        let frequency =
            TypeFrequency::aggregate([Some(vec!["bar", "cafe"]), Some(vec!["bar"])]).unwrap();
        let mut output = Vec::new();
        write_outcome(&mut output, &PlaceTypesOutcome::Found(frequency)).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\nNearby Place Types:\nCount: 2, Type: bar\nCount: 1, Type: cafe\n"
        );
    }

    #[tokio::test]
    async fn exit_stops_loop() {
        let output = run_menu(&service(Ok(paris())), "4\n", opener_ok).await;
        assert_eq!(output.matches("1: Output current location").count(), 1);
    }

    #[tokio::test]
    async fn end_of_input_stops_loop() {
        let output = run_menu(&service(Ok(paris())), "", opener_ok).await;
        assert!(output.contains("4: Exit"));
    }

    #[tokio::test]
    async fn entered_location_prints_ranking() {
        let output = run_menu(&service(Ok(paris())), "3\n52.52\n13.405\n4\n", opener_ok).await;
        assert!(output.contains("Nearby Place Types:\nCount: 2, Type: bar\nCount: 1, Type: cafe"));
    }

    #[tokio::test]
    async fn invalid_entry_returns_to_menu() {
        let output = run_menu(&service(Ok(paris())), "3\n95\n0\n4\n", opener_ok).await;
        assert!(output.contains("Invalid latitude '95'"));
        assert!(!output.contains("Nearby Place Types:"));
        assert_eq!(output.matches("4: Exit").count(), 2);
    }

    #[tokio::test]
    async fn current_location_is_printed() {
        let output = run_menu(&service(Ok(paris())), "1\nn\n4\n", opener_ok).await;
        assert!(output.contains("Latitude: 48.8584, Longitude: 2.2945"));
        assert!(!output.contains("Could not view this URL"));
    }

    #[tokio::test]
    async fn failed_open_prints_link() {
        let output = run_menu(&service(Ok(paris())), "1\ny\n4\n", opener_fails).await;
        assert!(output.contains(
            "Could not view this URL in a browser: \
             https://www.google.com/maps/search/?api=1&query=48.8584%2C2.2945"
        ));
    }

    #[tokio::test]
    async fn location_error_is_reported() {
        let output = run_menu(
            &service(Err(LocationError::PermissionDenied)),
            "2\n4\n",
            opener_ok,
        )
        .await;
        assert!(output.contains("Geolocation permission has not been granted"));
    }

    #[tokio::test]
    async fn nearby_here_prints_ranking() {
        let output = run_menu(&service(Ok(paris())), "2\n4\n", opener_ok).await;
        assert!(output.contains("Count: 2, Type: bar"));
    }
}
