//! The merged set of named fields describing one monitoring event.
//!
//! [`NotificationContext::resolve`] is the validation stage: it turns the
//! loosely-typed merged option set into a typed context where every
//! mandatory field is guaranteed present. The context is immutable from
//! then on and doubles as the template scope.

use std::path::PathBuf;

use serde_json::{json, Value};

use crate::cli::Cli;
use crate::error::OptionError;

/// Typed, validated notification context.
///
/// Mandatory fields are plain `String`s; optional fields stay `Option` and
/// render as empty strings in the template scope.
#[derive(Debug, Clone)]
pub struct NotificationContext {
    pub date: String,
    pub servicename: String,
    pub hostname: String,
    pub hostdisplayname: String,
    pub serviceoutput: String,
    pub usermail: String,
    pub servicestate: String,
    pub notificationtype: String,
    pub servicedisplayname: String,
    pub templatefile: PathBuf,

    pub mailfrom: Option<String>,
    pub address: Option<String>,
    pub address6: Option<String>,
    pub author: Option<String>,
    pub comment: Option<String>,
    pub icingaweb2url: Option<String>,

    pub extrainformation: Vec<String>,
}

fn require(value: &Option<String>, option: &'static str) -> Result<String, OptionError> {
    value.clone().ok_or(OptionError::Missing { option })
}

impl NotificationContext {
    /// Validate the merged option set and build the context.
    ///
    /// Mandatory fields are checked in a fixed order and the first missing
    /// one aborts the run; the template file's existence has already been
    /// verified right after parsing.
    pub fn resolve(cli: &Cli) -> Result<Self, OptionError> {
        let date = require(&cli.date, "date")?;
        let servicename = require(&cli.servicename, "servicename")?;
        let hostname = require(&cli.hostname, "hostname")?;
        let hostdisplayname = require(&cli.hostdisplayname, "hostdisplayname")?;
        let serviceoutput = require(&cli.serviceoutput, "serviceoutput")?;
        let usermail = require(&cli.usermail, "usermail")?;
        let servicestate = require(&cli.servicestate, "servicestate")?;
        let notificationtype = require(&cli.notificationtype, "notificationtype")?;
        let servicedisplayname = require(&cli.servicedisplayname, "servicedisplayname")?;
        let templatefile = cli
            .templatefile
            .clone()
            .ok_or(OptionError::Missing {
                option: "templatefile",
            })?;

        Ok(Self {
            date,
            servicename,
            hostname,
            hostdisplayname,
            serviceoutput,
            usermail,
            servicestate,
            notificationtype,
            servicedisplayname,
            templatefile,
            mailfrom: cli.mailfrom.clone(),
            address: cli.address.clone(),
            address6: cli.address6.clone(),
            author: cli.author.clone(),
            comment: cli.comment.clone(),
            icingaweb2url: cli.icingaweb2url.clone(),
            extrainformation: cli
                .extrainformation
                .iter()
                .map(|e| e.trim().to_string())
                .collect(),
        })
    }

    /// Template scope: every field as a directly addressable variable.
    ///
    /// Unset optional fields are present as empty strings, so templates can
    /// reference and test them; only names outside this set are undefined.
    pub fn scope(&self) -> Value {
        fn opt(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("")
        }

        json!({
            "date": self.date,
            "servicename": self.servicename,
            "hostname": self.hostname,
            "hostdisplayname": self.hostdisplayname,
            "serviceoutput": self.serviceoutput,
            "usermail": self.usermail,
            "servicestate": self.servicestate,
            "notificationtype": self.notificationtype,
            "servicedisplayname": self.servicedisplayname,
            "templatefile": self.templatefile.display().to_string(),
            "mailfrom": opt(&self.mailfrom),
            "address": opt(&self.address),
            "address6": opt(&self.address6),
            "author": opt(&self.author),
            "comment": opt(&self.comment),
            "icingaweb2url": opt(&self.icingaweb2url),
            "extrainformation": self.extrainformation,
        })
    }
}
