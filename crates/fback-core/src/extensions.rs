//! Extension vocabularies for the `$ext`, `$b_ext` and `$c_ext` placeholders.

/// Editor, tool and manual backup suffixes.
pub const BACKUP_EXTENSIONS: &[&str] = &[
    "bpa", "bak", "swp", "~", "tmp", "bckp", "new", "spg", "acp", "bkup", "backup", "bak3", "bkz",
    "abu", "bdb", "blend", "backupdb", "sav", "save", "orig", "tig", "sh", "bck", "bk", "bash",
    "copy", "backup1", "bakx", "npf", "log", "old", "bundle", "adi", "mbk", "ba", "bak2", "bps",
    "pack", "abk", "back",
];

/// Archive and compression suffixes.
pub const COMPRESSION_EXTENSIONS: &[&str] = &[
    "zip", "rar", "7z", "tar", "gzip", "bzip", "bz", "tar.xz", "pkg.tar.xz", "tg", "tar.gz",
    "tar.bzip", "tsv.gz", "gz", "dz", "tbz", "pkg",
];

pub fn backup_extensions() -> Vec<String> {
    BACKUP_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

pub fn compression_extensions() -> Vec<String> {
    COMPRESSION_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}
