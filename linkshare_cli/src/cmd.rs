// Copyright 2025 ReductSoftware UG
// This Source Code Form is subject to the terms of the Mozilla Public
//    License, v. 2.0. If a copy of the MPL was not distributed with this
//    file, You can obtain one at https://mozilla.org/MPL/2.0/.
pub(crate) mod alias;
pub(crate) mod link;

const ALIAS_OR_URL_HELP: &str =
    "Alias or URL (e.g. https://token@acme.example.com) of the provider to use";
const LINK_PATH_HELP: &str =
    "Path to a link (e.g. ALIAS/<LINK_ID> or https://token@acme.example.com/<LINK_ID>)";
