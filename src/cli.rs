//! Command-line interface for mailnotify using clap.
//!
//! Every notification field can arrive either as a flag or as the
//! environment variable Icinga 2 exports for it; an explicit flag always
//! overrides the environment value. Merging happens entirely inside clap
//! via the `env` attribute, so the parsed [`Cli`] IS the merged option set.

use clap::Parser;
use std::path::PathBuf;

/// Templated e-mail notifications for Icinga 2.
#[derive(Parser, Debug)]
#[command(name = "mailnotify")]
#[command(version)]
#[command(about = "Send a templated e-mail for one Icinga 2 notification event")]
pub struct Cli {
    /// LONGDATETIME ($icinga.long_date_time$)
    #[arg(short = 'd', long = "date", env = "LONGDATETIME")]
    pub date: Option<String>,

    /// SERVICENAME ($service.name$)
    #[arg(short = 'e', long = "servicename")]
    pub servicename: Option<String>,

    /// HOSTNAME ($host.name$)
    #[arg(short = 'l', long = "hostname", env = "HOSTNAME")]
    pub hostname: Option<String>,

    /// HOSTDISPLAYNAME ($host.display_name$)
    #[arg(short = 'n', long = "hostdisplayname", env = "HOSTDISPLAYNAME")]
    pub hostdisplayname: Option<String>,

    /// SERVICEOUTPUT ($service.output$)
    #[arg(short = 'o', long = "serviceoutput", env = "HOSTOUTPUT")]
    pub serviceoutput: Option<String>,

    /// USEREMAIL ($user.email$)
    #[arg(short = 'r', long = "usermail", env = "USEREMAIL")]
    pub usermail: Option<String>,

    /// SERVICESTATE ($service.state$)
    #[arg(short = 's', long = "servicestate", env = "HOSTSTATE")]
    pub servicestate: Option<String>,

    /// NOTIFICATIONTYPE ($notification.type$)
    #[arg(short = 't', long = "notificationtype", env = "NOTIFICATIONTYPE")]
    pub notificationtype: Option<String>,

    /// SERVICEDISPLAYNAME ($service.display_name$)
    #[arg(short = 'u', long = "servicedisplayname")]
    pub servicedisplayname: Option<String>,

    /// Template file rendered into the full mail payload
    #[arg(short = 'T', long = "templatefile")]
    pub templatefile: Option<PathBuf>,

    /// HOSTADDRESS ($address$)
    #[arg(short = '4', long = "address", env = "HOSTADDRESS")]
    pub address: Option<String>,

    /// HOSTADDRESS6 ($address6$)
    #[arg(short = '6', long = "address6", env = "HOSTADDRESS6")]
    pub address6: Option<String>,

    /// NOTIFICATIONAUTHORNAME ($notification.author$)
    #[arg(short = 'b', long = "author", env = "NOTIFICATIONAUTHORNAME")]
    pub author: Option<String>,

    /// NOTIFICATIONCOMMENT ($notification.comment$)
    #[arg(short = 'c', long = "comment", env = "NOTIFICATIONCOMMENT")]
    pub comment: Option<String>,

    /// ICINGAWEB2URL ($notification_icingaweb2url$)
    #[arg(short = 'i', long = "icingaweb2url", env = "ICINGAWEB2URL")]
    pub icingaweb2url: Option<String>,

    /// MAILFROM ($notification_mailfrom$)
    #[arg(short = 'f', long = "mailfrom", env = "MAILFROM")]
    pub mailfrom: Option<String>,

    /// Extra information, repeatable; each occurrence appends one line
    #[arg(short = 'E', long = "extrainformation")]
    pub extrainformation: Vec<String>,

    /// Divert fatal messages away from the log file
    #[arg(short = 'v', long = "log")]
    pub log: bool,
}

impl Cli {
    /// Semicolon-joined `key: value` rendering of the merged option set.
    ///
    /// Used for the success and fatal log lines. Unset options render with
    /// an empty value so the line always carries every known field.
    pub fn summary(&self) -> String {
        fn opt(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("")
        }

        let templatefile = self
            .templatefile
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        [
            format!("date: {}", opt(&self.date)),
            format!("servicename: {}", opt(&self.servicename)),
            format!("hostname: {}", opt(&self.hostname)),
            format!("hostdisplayname: {}", opt(&self.hostdisplayname)),
            format!("serviceoutput: {}", opt(&self.serviceoutput)),
            format!("usermail: {}", opt(&self.usermail)),
            format!("servicestate: {}", opt(&self.servicestate)),
            format!("notificationtype: {}", opt(&self.notificationtype)),
            format!("servicedisplayname: {}", opt(&self.servicedisplayname)),
            format!("templatefile: {}", templatefile),
            format!("mailfrom: {}", opt(&self.mailfrom)),
            format!("address: {}", opt(&self.address)),
            format!("address6: {}", opt(&self.address6)),
            format!("author: {}", opt(&self.author)),
            format!("comment: {}", opt(&self.comment)),
            format!("icingaweb2url: {}", opt(&self.icingaweb2url)),
            format!("extrainformation: {}", self.extrainformation.join(", ")),
        ]
        .join(";")
    }
}
