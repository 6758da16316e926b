/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


use std::ffi::OsStr;

use cereal_bmp::BmpInfo;
use cereal_ocr::{MatchResult, Score};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header of a probed file
pub struct Metadata<'a> {
    file:     &'a OsStr,
    size:     u64,
    metadata: &'a BmpInfo
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a OsStr, size: u64, metadata: &'a BmpInfo) -> Metadata<'a> {
        Metadata {
            file,
            size,
            metadata
        }
    }
}

impl Serialize for Metadata<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("metadata", &self.metadata)?;

        state.end()
    }
}

/// Recognition outcome of one input file
pub struct Report<'a> {
    file:   &'a OsStr,
    result: &'a MatchResult,
    scores: Option<&'a [Score]>
}

impl<'a> Report<'a> {
    pub fn new(file: &'a OsStr, result: &'a MatchResult, scores: Option<&'a [Score]>) -> Report<'a> {
        Report {
            file,
            result,
            scores
        }
    }
}

impl Serialize for Report<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let fields = if self.scores.is_some() { 4 } else { 3 };
        let mut state = serializer.serialize_struct("Report", fields)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("character", &self.result.character)?;
        state.serialize_field("score", &self.result.score)?;
        if let Some(scores) = self.scores {
            state.serialize_field("scores", scores)?;
        }
        state.end()
    }
}
