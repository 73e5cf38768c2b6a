// Domain layer: conversion models and ports (clock, index source, config).

pub mod model;
pub mod ports;
