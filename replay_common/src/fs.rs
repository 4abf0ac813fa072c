/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
use std::fs::{self,File};
use std::io::{self,Read,Write,ErrorKind};
use std::path::{Path,PathBuf};
use regex::Regex;

use crate::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn filestem <'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_stem().and_then(|ostr| ostr.to_str())
}

/// create dir (and parents) if it does not exist yet. Note this also succeeds if somebody else
/// created the dir concurrently
pub fn ensure_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        if let Err(e) = fs::create_dir_all(path) {
            if e.kind() != ErrorKind::AlreadyExists || !path.is_dir() {
                return Err(e)
            }
        }
    }
    Ok(())
}

pub fn file_contents_as_bytes (path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut contents: Vec<u8> = Vec::with_capacity(len as usize);
    file.read_to_end(&mut contents)?;
    Ok(contents)
}

pub fn file_contents_as_string (path: impl AsRef<Path>) -> Result<String> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    let mut contents = String::with_capacity(len as usize);
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// write contents to a '.tmp' sibling first and then rename, so that readers never see partial files
pub fn write_file_atomic (path: impl AsRef<Path>, contents: &[u8])->Result<()> {
    let path = path.as_ref();
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    {
        let mut file = File::create(&tmp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }
    fs::rename( &tmp_path, path)
}

/// regular files within dir whose names match the provided regex, sorted by filename.
/// A sorted result gives us a platform independent enumeration order
pub fn matching_files_in_dir<P: AsRef<Path>> (dir: &P, fname_regex: &Regex) -> Result<Vec<PathBuf>> {
    let dir: &Path = dir.as_ref();
    if !dir.is_dir() {
        return Err( io_error!(ErrorKind::NotFound, "not a directory: {:?}", dir))
    }

    let mut list: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            if let Some(fname) = entry.file_name().to_str() {
                if fname_regex.is_match( fname) {
                    list.push(entry.path())
                }
            }
        }
    }
    list.sort();

    Ok(list)
}

/// regular files in dir with the given (case insensitive) extension, sorted by filename
pub fn files_with_extension<P: AsRef<Path>> (dir: &P, ext: &str) -> Result<Vec<PathBuf>> {
    let ext = ext.trim_start_matches('.');
    let re = Regex::new( &format!(r"(?i)^.+\.{}$", regex::escape(ext)))
        .map_err(|e| io_error!(ErrorKind::InvalidInput, "invalid extension {}: {}", ext, e))?;
    matching_files_in_dir( dir, &re)
}
