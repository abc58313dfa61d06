use crate::{
    constants::{localization::PARSED_RECORDS_MSG, *},
    core::{build_record, enrich},
    params::Params,
    types::*,
};
use log::{info, log};

/// Splits a description table into records, classifies them and builds typed [`Record`]s.
///
/// The table is a sequence of blocks, each terminated by a line holding a single `#`.
/// The first line of a block is the id followed by a colon, the rest is the description,
/// whose last separator-delimited part holds the parameters.
///
/// Records that can't be built are skipped, each one leaving a [`Diagnostic`] in the [`Output`].
pub struct ItemReader<'a> {
    tables: &'a Tables,
    logging: bool,
}

impl<'a> ItemReader<'a> {
    #[must_use]
    pub fn new(tables: &'a Tables) -> Self {
        Self {
            tables,
            logging: true,
        }
    }

    /// Whether diagnostics are also emitted through `log`. They're collected either way.
    #[must_use]
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    #[must_use]
    pub fn read(&self, content: &str) -> Output {
        let mut output: Output = Output::default();
        let mut pending: Vec<&str> = Vec::with_capacity(32);

        for line in content.lines() {
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }

            if line == RECORD_BOUNDARY {
                if !pending.is_empty() {
                    self.process_block(&pending, &mut output);
                    pending.clear();
                }

                continue;
            }

            pending.push(if line == RENDERED_SEPARATOR {
                DESCRIPTION_SEPARATOR
            } else {
                line
            });
        }

        if self.logging {
            info!("{PARSED_RECORDS_MSG}: {}", output.items.len());
        }

        output
    }

    fn process_block(&self, block: &[&str], output: &mut Output) {
        let Some((&id_line, lines)) = block.split_first() else {
            return;
        };

        let key: &str = id_line.strip_suffix(':').unwrap_or(id_line);
        let text: String = lines.join("\n");

        let params: Params = Params::parse(
            text.split(DESCRIPTION_SEPARATOR).last().unwrap_or_default(),
        );
        let description: Vec<String> =
            text.split('\n').map(str::to_owned).collect();

        let Some(name) = self
            .tables
            .names
            .get(key)
            .filter(|name| !name.is_empty())
        else {
            self.report(output, key, DiagnosticKind::NameNotFound);
            return;
        };

        if name == ABSENT || params.value(WEIGHT) == Some(ABSENT) {
            self.report(output, key, DiagnosticKind::MissingItem);
            return;
        }

        let Ok(id) = key.parse::<u32>() else {
            self.report(output, key, DiagnosticKind::InvalidId);
            return;
        };

        let mut record: Record =
            match build_record(id, name, description, &params) {
                Some(Ok(record)) => record,
                Some(Err(err)) => {
                    self.report(output, key, DiagnosticKind::Malformed(err));
                    return;
                }
                None => {
                    self.report(
                        output,
                        key,
                        DiagnosticKind::NotSupported(params.into()),
                    );
                    return;
                }
            };

        enrich(&mut record, key, self.tables);

        if let Attributes::Card(card) = &record.attributes {
            if card.location.is_none() {
                self.report(output, key, DiagnosticKind::UnresolvedLocation);
            }
        }

        output.items.insert(key.to_owned(), record);
    }

    fn report(&self, output: &mut Output, key: &str, kind: DiagnosticKind) {
        let diagnostic: Diagnostic = Diagnostic::new(key, kind);

        if self.logging {
            log!(diagnostic.level(), "{diagnostic}");
        }

        output.diagnostics.push(diagnostic);
    }
}
